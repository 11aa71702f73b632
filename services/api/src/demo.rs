use crate::infra::{InMemoryLeadRepository, LoggingLeadNotifier};
use clap::Args;
use itrisk::error::AppError;
use itrisk::workflows::assessment::{
    price, price_range, score, Answer, AssessmentCsvImporter, AssessmentInput, BackupFrequency,
    BusinessSize, Industry, IssueFrequency, LastAudit, PriceRange, PricingResult, ResponseNeed,
    RiskScore,
};
use itrisk::workflows::leads::{ContactDetails, LeadCaptureService, LeadSubmission};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding one questionnaire answer set (wire field names)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the raw result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Questionnaire CSV export with wire-name headers
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Industry used for the sample questionnaire (defaults to Legal)
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Skip the lead capture portion of the demo
    #[arg(long)]
    pub(crate) skip_lead: bool,
}

/// Everything the report page shows for one answer set.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReport {
    pub(crate) input: AssessmentInput,
    pub(crate) risk: RiskScore,
    pub(crate) pricing: PricingResult,
    pub(crate) price_range: PriceRange,
}

impl AssessmentReport {
    pub(crate) fn build(input: AssessmentInput) -> Self {
        Self {
            risk: score(&input),
            pricing: price(&input),
            price_range: price_range(&input),
            input,
        }
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let input: AssessmentInput = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
    let report = AssessmentReport::build(input);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = AssessmentCsvImporter::from_path(&args.csv)?;

    println!("Scored {} questionnaire rows from {}", rows.len(), args.csv.display());
    for (index, input) in rows.iter().enumerate() {
        println!("{}", batch_line(index + 1, input));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        industry,
        skip_lead,
    } = args;

    let mut input = sample_input();
    if let Some(industry) = industry {
        input.industry = Industry::parse(&industry);
    }

    println!("IT risk assessment demo");
    let report = AssessmentReport::build(input);
    print!("{}", render_report(&report));

    if skip_lead {
        return Ok(());
    }

    println!("\nLead capture demo");
    let repository = Arc::new(InMemoryLeadRepository::default());
    let service = LeadCaptureService::new(repository, Arc::new(LoggingLeadNotifier));

    let submission = LeadSubmission {
        contact: ContactDetails {
            name: "Dana Whitfield".to_string(),
            email: "dana@whitfield-legal.com".to_string(),
            company: "Whitfield Legal".to_string(),
            phone: Some("515-555-0142".to_string()),
        },
        answers: input,
    };

    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    let view = record.summary_view();
    println!(
        "- Captured {} for {} -> notification {}",
        view.lead_id.as_str(),
        view.company,
        view.notification.label()
    );
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("  Public lead payload:\n{}", json),
        Err(err) => println!("  Public lead payload unavailable: {}", err),
    }

    match service.recent(5) {
        Ok(recent) => println!("  Leads on file: {}", recent.len()),
        Err(err) => println!("  Lead store unavailable: {}", err),
    }

    Ok(())
}

fn sample_input() -> AssessmentInput {
    AssessmentInput {
        business_size: BusinessSize::SixToTwenty,
        industry: Industry::Legal,
        sensitive_data: Answer::Yes,
        internal_it: Answer::No,
        mfa_enabled: Answer::Partially,
        endpoint_protection: Answer::NotSure,
        data_regulations: Answer::Yes,
        last_audit: LastAudit::OverAYearAgo,
        backup_frequency: BackupFrequency::Weekly,
        it_issues: IssueFrequency::Weekly,
        response_needed: ResponseNeed::WithinAnHour,
    }
}

pub(crate) fn render_report(report: &AssessmentReport) -> String {
    let AssessmentReport {
        input,
        risk,
        pricing,
        price_range,
    } = report;

    let mut lines = vec![
        format!(
            "Business: {} employees | {}",
            input.business_size.label(),
            input.industry.label()
        ),
        format!(
            "Overall risk: {}/100 ({}) | Value of managed IT: {}/100",
            risk.total,
            risk.risk_level.label(),
            risk.value_score
        ),
        "Categories:".to_string(),
    ];

    for category in &risk.categories {
        lines.push(format!(
            "  - {}: risk {:.1} | value {:.1}",
            category.name, category.risk_score, category.value_score
        ));
        for area in &category.risk_areas {
            lines.push(format!("      ! {area}"));
        }
    }

    if !risk.summary.top_risks.is_empty() {
        lines.push("Top risks:".to_string());
        lines.extend(risk.summary.top_risks.iter().map(|item| format!("  - {item}")));
    }

    if !risk.summary.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        lines.extend(
            risk.summary
                .recommendations
                .iter()
                .map(|recommendation| format!("  - {recommendation}")),
        );
    }

    lines.push(format!(
        "Estimated price: ${}/month (${}/year) | {} package, {} users at ${}/user",
        pricing.monthly_total,
        pricing.annual_total,
        pricing.size_category.label(),
        pricing.user_count,
        pricing.per_user_price
    ));
    for add_on in &pricing.add_ons {
        lines.push(format!("  + {}: ${}/month", add_on.label, add_on.monthly));
    }
    lines.push(format!(
        "Typical range: ${}-${}/month (${}-${}/year){}",
        price_range.min_monthly,
        price_range.max_monthly,
        price_range.min_annual,
        price_range.max_annual,
        if price_range.is_high_compliance {
            " incl. compliance management"
        } else {
            ""
        }
    ));

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

pub(crate) fn batch_line(row: usize, input: &AssessmentInput) -> String {
    let risk = score(input);
    let pricing = price(input);
    format!(
        "{:>4}  {:<12} {:<7} risk {:>3} {:<6} ${}/month",
        row,
        input.industry.label(),
        input.business_size.label(),
        risk.total,
        risk.risk_level.label(),
        pricing.monthly_total
    )
}
