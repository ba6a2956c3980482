use serde::{Deserialize, Serialize};

/// Placeholder written for any field that could not be located on the page.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One job card from the search results, optionally enriched with the
/// fields of its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Job URL")]
    pub job_url: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Employment Type")]
    pub employment_type: String,
    #[serde(rename = "Seniority")]
    pub seniority: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Skills Matched")]
    pub skills_matched: String,
    #[serde(rename = "Applications")]
    pub applications: String,
    #[serde(rename = "Posting Date")]
    pub posting_date: String,
    #[serde(rename = "Salary Range")]
    pub salary_range: String,
    #[serde(rename = "Salary Type")]
    pub salary_type: String,
    #[serde(rename = "Logo URL")]
    pub logo_url: String,
    #[serde(skip)]
    pub details: Option<JobDetails>,
}

impl JobRecord {
    pub const COLUMNS: [&'static str; 13] = [
        "Company Name",
        "Job Title",
        "Job URL",
        "Location",
        "Employment Type",
        "Seniority",
        "Category",
        "Skills Matched",
        "Applications",
        "Posting Date",
        "Salary Range",
        "Salary Type",
        "Logo URL",
    ];

    /// Listing values in `COLUMNS` order.
    pub fn values(&self) -> [&str; 13] {
        [
            &self.company_name,
            &self.job_title,
            &self.job_url,
            &self.location,
            &self.employment_type,
            &self.seniority,
            &self.category,
            &self.skills_matched,
            &self.applications,
            &self.posting_date,
            &self.salary_range,
            &self.salary_type,
            &self.logo_url,
        ]
    }

    pub fn has_url(&self) -> bool {
        !self.job_url.is_empty() && self.job_url != NOT_AVAILABLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDetails {
    pub job_id: String,
    pub employment_type: String,
    pub seniority: String,
    pub experience: String,
    pub categories: String,
    pub salary_range: String,
    pub salary_type: String,
    pub applications: String,
    pub posting_date: String,
    pub closing_date: String,
}

impl JobDetails {
    pub const COLUMNS: [&'static str; 10] = [
        "Job ID",
        "Employment Type (Detailed)",
        "Seniority (Detailed)",
        "Experience",
        "Categories (Detailed)",
        "Salary Range (Detailed)",
        "Salary Type (Detailed)",
        "Applications (Detailed)",
        "Posting Date (Detailed)",
        "Closing Date",
    ];

    pub fn not_available() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        JobDetails {
            job_id: na(),
            employment_type: na(),
            seniority: na(),
            experience: na(),
            categories: na(),
            salary_range: na(),
            salary_type: na(),
            applications: na(),
            posting_date: na(),
            closing_date: na(),
        }
    }

    pub fn values(&self) -> [&str; 10] {
        [
            &self.job_id,
            &self.employment_type,
            &self.seniority,
            &self.experience,
            &self.categories,
            &self.salary_range,
            &self.salary_type,
            &self.applications,
            &self.posting_date,
            &self.closing_date,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_becomes_sentinel() {
        assert_eq!(or_not_available(None), "N/A");
        assert_eq!(or_not_available(Some(String::new())), "");
        assert_eq!(or_not_available(Some("Acme".into())), "Acme");
    }

    #[test]
    fn sentinel_url_is_not_navigable() {
        let mut record = JobRecord {
            company_name: "Acme".into(),
            job_title: "Analyst".into(),
            job_url: NOT_AVAILABLE.into(),
            location: "West".into(),
            employment_type: "Full Time".into(),
            seniority: "Junior".into(),
            category: "IT".into(),
            skills_matched: NOT_AVAILABLE.into(),
            applications: "3 applications".into(),
            posting_date: "Posted today".into(),
            salary_range: "$4,000 to $6,000".into(),
            salary_type: "Monthly".into(),
            logo_url: NOT_AVAILABLE.into(),
            details: None,
        };
        assert!(!record.has_url());
        record.job_url = "https://www.mycareersfuture.gov.sg/job/1".into();
        assert!(record.has_url());
        assert_eq!(record.values()[2], "https://www.mycareersfuture.gov.sg/job/1");
    }
}
