//! Static narrative tables rendered alongside each category score.

use super::domain::{Industry, SizeBucket};
use super::scoring::CategoryKind;
use serde::Serialize;

/// Description used whenever an industry or category has no tailored text.
pub const GENERIC_INSIGHT: &str = "General business IT requirements apply.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsights {
    pub description: &'static str,
    pub industry_specific: Vec<&'static str>,
    pub size_specific: Vec<&'static str>,
}

/// Insight bundle for a known industry, category, and size bucket.
pub fn lookup(industry: Industry, category: CategoryKind, bucket: SizeBucket) -> CategoryInsights {
    let (description, industry_specific) = industry_text(industry, category);
    CategoryInsights {
        description,
        industry_specific: industry_specific.to_vec(),
        size_specific: size_text(category, bucket).to_vec(),
    }
}

/// Free-text lookup used by the public insights endpoint.
///
/// Unknown industries resolve to `Other`; unknown categories produce the generic
/// description with no bullets.
pub fn lookup_by_key(industry: &str, category: &str, bucket: SizeBucket) -> CategoryInsights {
    let industry = Industry::parse(industry);
    match CategoryKind::parse(category) {
        Some(category) => lookup(industry, category, bucket),
        None => CategoryInsights {
            description: GENERIC_INSIGHT,
            industry_specific: Vec::new(),
            size_specific: Vec::new(),
        },
    }
}

pub fn industry_risks(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Legal => &[
            "Client privilege depends on confidential matter files staying private",
            "Law firms are frequent targets of wire-fraud and business email compromise",
            "Bar rules require reasonable safeguards for client information",
        ],
        Industry::Finance => &[
            "Financial records and account credentials attract targeted attacks",
            "Regulators expect documented security programs and incident response",
            "Downtime during trading or settlement windows carries direct losses",
        ],
        Industry::Accounting => &[
            "Tax season concentrates sensitive client data and workload",
            "IRS Publication 4557 and the FTC Safeguards Rule require a written security plan",
            "Phishing campaigns impersonate tax authorities and clients",
        ],
        Industry::Retail => &[
            "Point-of-sale systems and card data fall under PCI DSS",
            "Store outages directly stop revenue",
            "Customer loyalty data is attractive to credential stuffers",
        ],
        Industry::Healthcare => &[
            "Protected health information is governed by HIPAA",
            "Ransomware against clinics can halt patient care",
            "Medical devices and practice software often run outdated systems",
        ],
        Industry::Other => &[
            "Email compromise and ransomware affect businesses of every kind",
            "Unpatched systems and weak passwords remain the most common entry points",
        ],
    }
}

pub fn industry_values(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Legal => &[
            "Secure document management and encrypted client communication",
            "Matter-centric access controls for partners and staff",
            "Evidence of reasonable safeguards for malpractice insurers",
        ],
        Industry::Finance => &[
            "Controls mapped to SEC, FINRA, and GLBA expectations",
            "Continuous monitoring of privileged and trading systems",
            "Documented incident response ready for examiner review",
        ],
        Industry::Accounting => &[
            "A written information security plan maintained for you",
            "Secure client portals in place of emailed tax documents",
            "Seasonal capacity planning ahead of filing deadlines",
        ],
        Industry::Retail => &[
            "PCI-aligned network segmentation for payment systems",
            "Fast recovery for point-of-sale and inventory systems",
            "Centralized management across store locations",
        ],
        Industry::Healthcare => &[
            "HIPAA risk assessments and business associate agreements",
            "Encrypted, audited access to patient records",
            "Tested recovery plans that keep clinics running",
        ],
        Industry::Other => &[
            "Right-sized security controls for your operations",
            "Predictable support costs and a single point of contact",
        ],
    }
}

fn industry_text(
    industry: Industry,
    category: CategoryKind,
) -> (&'static str, &'static [&'static str]) {
    match (industry, category) {
        (Industry::Legal, CategoryKind::BusinessProfile) => (
            "Law firms hold privileged client information that must stay confidential for the life of a matter.",
            &[
                "Segregate matter files by client and restrict access by role",
                "Protect trust-account workflows against payment redirection fraud",
                "Keep retention schedules aligned with bar guidance",
            ],
        ),
        (Industry::Legal, CategoryKind::Security) => (
            "Attackers target firms for wire instructions and case files, usually through email.",
            &[
                "Require MFA on email and document management systems",
                "Screen inbound mail for impersonation of clients and opposing counsel",
                "Encrypt laptops used in court and on the road",
            ],
        ),
        (Industry::Legal, CategoryKind::ComplianceSupport) => (
            "Professional conduct rules expect competence in the technology used to serve clients.",
            &[
                "Document safeguards to answer client security questionnaires",
                "Plan support coverage around filing deadlines and trials",
                "Review vendor access to case management platforms annually",
            ],
        ),
        (Industry::Finance, CategoryKind::BusinessProfile) => (
            "Financial firms manage account data and transactions that regulators expect to be tightly controlled.",
            &[
                "Inventory systems that store customer financial information",
                "Separate advisory, operations, and administrative access",
                "Track third parties that touch client accounts",
            ],
        ),
        (Industry::Finance, CategoryKind::Security) => (
            "Credential theft and account takeover are the leading threats to financial services.",
            &[
                "Enforce phishing-resistant MFA for advisors and operations staff",
                "Monitor for anomalous logins and transfer requests",
                "Harden endpoints that access custodial platforms",
            ],
        ),
        (Industry::Finance, CategoryKind::ComplianceSupport) => (
            "Examiners look for written policies, regular testing, and evidence of oversight.",
            &[
                "Maintain a written information security program under GLBA",
                "Test incident response and business continuity annually",
                "Retain books and records according to SEC and FINRA rules",
            ],
        ),
        (Industry::Accounting, CategoryKind::BusinessProfile) => (
            "Accounting practices hold tax returns, payroll, and banking details for every client.",
            &[
                "Limit access to client folders to assigned staff",
                "Track where client documents are exchanged and stored",
                "Plan for seasonal staff onboarding and offboarding",
            ],
        ),
        (Industry::Accounting, CategoryKind::Security) => (
            "Tax-season phishing and remote access abuse are persistent threats for firms.",
            &[
                "Require MFA on tax software and remote access",
                "Use secure portals for document exchange",
                "Keep workstations patched before filing season",
            ],
        ),
        (Industry::Accounting, CategoryKind::ComplianceSupport) => (
            "Tax preparers must maintain a written security plan under the FTC Safeguards Rule.",
            &[
                "Keep the written information security plan current",
                "Document employee security training each year",
                "Arrange priority support during filing deadlines",
            ],
        ),
        (Industry::Retail, CategoryKind::BusinessProfile) => (
            "Retailers depend on point-of-sale, inventory, and e-commerce systems staying online.",
            &[
                "Map payment flows across stores and online channels",
                "Identify systems that hold customer contact and loyalty data",
                "Standardize equipment across locations",
            ],
        ),
        (Industry::Retail, CategoryKind::Security) => (
            "Payment systems and online storefronts are prime targets for card skimming and fraud.",
            &[
                "Segment point-of-sale networks from guest and office Wi-Fi",
                "Protect e-commerce admin accounts with MFA",
                "Monitor for skimming scripts and unauthorized changes",
            ],
        ),
        (Industry::Retail, CategoryKind::ComplianceSupport) => (
            "PCI DSS applies to every business that stores, processes, or transmits card data.",
            &[
                "Complete the PCI self-assessment questionnaire annually",
                "Line up support coverage for weekends and holidays",
                "Keep vendor remote access to registers under control",
            ],
        ),
        (Industry::Healthcare, CategoryKind::BusinessProfile) => (
            "Healthcare organizations handle protected health information across clinical and billing systems.",
            &[
                "Inventory every system that stores or transmits PHI",
                "Restrict record access to the minimum necessary",
                "Track business associates with access to patient data",
            ],
        ),
        (Industry::Healthcare, CategoryKind::Security) => (
            "Ransomware against healthcare providers disrupts patient care and triggers breach reporting.",
            &[
                "Require MFA on EHR and remote access",
                "Isolate medical devices on their own network segment",
                "Keep offline, tested backups of clinical systems",
            ],
        ),
        (Industry::Healthcare, CategoryKind::ComplianceSupport) => (
            "HIPAA requires periodic risk analysis and documented safeguards.",
            &[
                "Perform and document an annual HIPAA security risk analysis",
                "Maintain business associate agreements with IT vendors",
                "Ensure support is available during clinic hours",
            ],
        ),
        (Industry::Other, _) => (
            GENERIC_INSIGHT,
            &[
                "Apply baseline controls: MFA, patching, and backups",
                "Review who has administrative access each quarter",
            ],
        ),
    }
}

fn size_text(category: CategoryKind, bucket: SizeBucket) -> &'static [&'static str] {
    match (category, bucket) {
        (CategoryKind::BusinessProfile, SizeBucket::Small) => &[
            "Small teams often rely on one person for IT, creating a single point of failure",
            "Outsourced IT gives access to specialists without full-time salaries",
        ],
        (CategoryKind::BusinessProfile, SizeBucket::Medium) => &[
            "Growing headcount makes onboarding and offboarding a security concern",
            "Standardized devices and accounts reduce support overhead",
        ],
        (CategoryKind::BusinessProfile, SizeBucket::Large) => &[
            "Larger organizations need documented asset and identity management",
            "Departmental systems multiply the number of administrators to govern",
        ],
        (CategoryKind::Security, SizeBucket::Small) => &[
            "Attackers target small businesses expecting weaker defenses",
            "Cloud-managed security tools deliver enterprise protection at small scale",
        ],
        (CategoryKind::Security, SizeBucket::Medium) => &[
            "More users and devices widen the attack surface",
            "Centralized monitoring becomes essential past a few dozen endpoints",
        ],
        (CategoryKind::Security, SizeBucket::Large) => &[
            "Round-the-clock monitoring is needed to catch attacks outside business hours",
            "Privileged access management limits the blast radius of a compromise",
        ],
        (CategoryKind::ComplianceSupport, SizeBucket::Small) => &[
            "Lightweight policies and annual reviews keep compliance manageable",
            "A support plan avoids paying emergency rates for every incident",
        ],
        (CategoryKind::ComplianceSupport, SizeBucket::Medium) => &[
            "Documented procedures let compliance survive staff turnover",
            "Tiered support keeps routine requests from blocking urgent ones",
        ],
        (CategoryKind::ComplianceSupport, SizeBucket::Large) => &[
            "Formal audit cycles and evidence collection become routine work",
            "Service-level agreements align support with business-critical hours",
        ],
    }
}
