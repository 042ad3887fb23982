use serde::{Deserialize, Serialize};

/// Spreadsheet header row, in output column order.
pub const LEAD_COLUMNS: [&str; 16] = [
    "AI Predict Score (Champion)",
    "AI Predict Score (Challenger)",
    "NLP Intent Tag",
    "Full Name",
    "Job Title",
    "Company Name",
    "Company Website",
    "LinkedIn Profile URL",
    "Company LinkedIn URL",
    "Industry",
    "Company Size",
    "Location",
    "Business Email",
    "CRM Detected",
    "Hiring Status",
    "Company Growth",
];

/// One synthetic sales-prospect record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "AI Predict Score (Champion)")]
    pub champion_score: u8,
    #[serde(rename = "AI Predict Score (Challenger)")]
    pub challenger_score: u8,
    #[serde(rename = "NLP Intent Tag")]
    pub intent_tag: String,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Company Website")]
    pub company_website: String,
    #[serde(rename = "LinkedIn Profile URL")]
    pub linkedin_profile_url: String,
    #[serde(rename = "Company LinkedIn URL")]
    pub company_linkedin_url: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Company Size")]
    pub company_size: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Business Email")]
    pub business_email: String,
    #[serde(rename = "CRM Detected")]
    pub crm_detected: String,
    #[serde(rename = "Hiring Status")]
    pub hiring_status: String,
    #[serde(rename = "Company Growth")]
    pub company_growth: String,
}

/// A single spreadsheet cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Number(u8),
    Text(&'a str),
}

impl Lead {
    /// Returns the row cells in [`LEAD_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [CellValue<'_>; 16] {
        [
            CellValue::Number(self.champion_score),
            CellValue::Number(self.challenger_score),
            CellValue::Text(&self.intent_tag),
            CellValue::Text(&self.full_name),
            CellValue::Text(&self.job_title),
            CellValue::Text(&self.company_name),
            CellValue::Text(&self.company_website),
            CellValue::Text(&self.linkedin_profile_url),
            CellValue::Text(&self.company_linkedin_url),
            CellValue::Text(&self.industry),
            CellValue::Text(&self.company_size),
            CellValue::Text(&self.location),
            CellValue::Text(&self.business_email),
            CellValue::Text(&self.crm_detected),
            CellValue::Text(&self.hiring_status),
            CellValue::Text(&self.company_growth),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            champion_score: 88,
            challenger_score: 91,
            intent_tag: "Budget Approved".to_string(),
            full_name: "Priya Nair".to_string(),
            job_title: "Founder".to_string(),
            company_name: "Apex Media Group".to_string(),
            company_website: "https://www.apex-media-group.io".to_string(),
            linkedin_profile_url: "https://www.linkedin.com/in/priya-nair-4821a".to_string(),
            company_linkedin_url: "https://www.linkedin.com/company/apex-media-group".to_string(),
            industry: "Digital Marketing Agency".to_string(),
            company_size: "5-50 employees".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            business_email: "priya@apex-media-group.io".to_string(),
            crm_detected: "HubSpot".to_string(),
            hiring_status: "Actively Hiring".to_string(),
            company_growth: "+12% YoY".to_string(),
        }
    }

    #[test]
    fn cells_follow_column_order() {
        let lead = sample_lead();
        let cells = lead.cells();
        assert_eq!(cells.len(), LEAD_COLUMNS.len());
        assert_eq!(cells[0], CellValue::Number(88));
        assert_eq!(cells[1], CellValue::Number(91));
        assert_eq!(cells[5], CellValue::Text("Apex Media Group"));
        assert_eq!(cells[15], CellValue::Text("+12% YoY"));
    }

    #[test]
    fn serialized_keys_match_column_headers() {
        let json = serde_json::to_value(sample_lead()).expect("serialize lead");
        let object = json.as_object().expect("lead serializes to an object");
        for column in LEAD_COLUMNS {
            assert!(object.contains_key(column), "missing key {column}");
        }
    }
}
