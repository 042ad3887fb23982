//! Fixed draw pools.

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Sai", "Reyansh", "Ayaan", "Krishna",
    "Ishaan", "Shaurya", "Atharv", "Ananya", "Diya", "Navya", "Saanvi", "Priya", "Anjali",
    "Riya", "Kavya", "Snigdha", "Meera", "Neha", "Pooja", "Rahul", "Vikram", "Rohan", "Rajat",
    "Amit", "Sumit", "Sandeep", "Karan", "Gaurav", "Varun", "Rohit", "Sneha", "Kunal", "John",
    "Sarah", "Michael",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Gupta", "Malhotra", "Singh", "Patel", "Shah", "Desai", "Joshi", "Reddy",
    "Rao", "Nair", "Iyer", "Kumar", "Chaudhary", "Das", "Yadav", "Rajput", "Mehta", "Bhatia",
    "Agarwal", "Kapoor", "Chatterjee", "Banerjee", "Mukherjee", "Trivedi", "Mishra", "Smith",
    "Doe",
];

pub(crate) const COMPANY_PREFIXES: &[&str] = &[
    "Apex", "Nova", "Zenith", "Pinnacle", "Elevate", "NextGen", "Pro", "Prime", "Alpha",
    "Global", "Tech", "Smart", "Giga", "Mega", "Rapid", "Bright",
];

pub(crate) const COMPANY_SUFFIXES: &[&str] = &[
    "Solutions", "Consulting", "Services", "Group", "Associates", "Partners", "Ventures",
    "Enterprises", "Dynamics", "Hub", "Network", "Works", "Labs",
];

pub(crate) const MEDIA_SUFFIXES: &[&str] = &["Group", "Agency", "Network"];
pub(crate) const CLINIC_PREFIXES: &[&str] = &["City", "Prime", "Care", "Wellness"];
pub(crate) const CLINIC_SUFFIXES: &[&str] = &["Care", "Center", "Clinic"];
pub(crate) const PROPERTY_PREFIXES: &[&str] = &["Premium", "Global", "Urban", "Core"];

pub(crate) const DOMAIN_SUFFIXES: &[&str] = &[".in", ".co.in", ".com", ".io", ".co"];

pub(crate) const NO_CRM: &str = "None detected";

pub(crate) const CRM_OPTIONS: &[&str] = &[
    "HubSpot",
    "Salesforce",
    "Zoho CRM",
    "Pipedrive",
    NO_CRM,
    "Freshsales",
];

pub(crate) const HIRING_OPTIONS: &[&str] = &[
    "Actively Hiring",
    "Stable",
    "Growing team",
    "No recent openings",
];

pub(crate) const INTENT_TAGS: &[&str] = &[
    "High Buying Intent",
    "Passive Researching",
    "Immediate Need",
    "Evaluating Competitors",
    "Budget Approved",
];
