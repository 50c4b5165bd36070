use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Salary value the API uses when a posting carries no salary information.
///
pub const SALARY_NOT_SPECIFIED: &str = "Not Specified";

fn default_salary_range() -> String {
    SALARY_NOT_SPECIFIED.to_string()
}

/// Geographic region of a posting, served either as one value or as a list.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Region {
    Single(String),
    Many(Vec<String>),
}

impl Default for Region {
    fn default() -> Self {
        Region::Many(vec![])
    }
}

impl Region {
    /// Returns the region as display text, or None when there is nothing to show.
    ///
    pub fn display(&self) -> Option<String> {
        let text = match self {
            Region::Single(region) => region.trim().to_string(),
            Region::Many(regions) => regions
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Defines job posting data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_about: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub apply_before: String,
    #[serde(default = "default_salary_range")]
    pub salary_range: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub apply_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub job_description: String, // HTML
}

impl JobPosting {
    /// Returns the salary range unless it is empty or the "Not Specified" sentinel.
    ///
    pub fn displayed_salary(&self) -> Option<&str> {
        let salary = self.salary_range.trim();
        if salary.is_empty() || salary == SALARY_NOT_SPECIFIED {
            None
        } else {
            Some(salary)
        }
    }

    /// Returns where to apply: the apply URL, else the posting URL.
    ///
    pub fn application_link(&self) -> Option<&str> {
        let apply_url = self.apply_url.trim();
        if !apply_url.is_empty() {
            return Some(apply_url);
        }
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Defines one page of job postings plus pagination metadata.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<JobPosting>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use serde_json::json;

    #[test]
    fn region_single_or_list() {
        let single: Region = serde_json::from_value(json!("Worldwide")).unwrap();
        assert_eq!(single, Region::Single("Worldwide".to_string()));
        assert_eq!(single.display().unwrap(), "Worldwide");

        let many: Region = serde_json::from_value(json!(["USA Only", "Europe"])).unwrap();
        assert_eq!(many.display().unwrap(), "USA Only, Europe");

        assert_eq!(Region::default().display(), None);
        assert_eq!(Region::Single("  ".to_string()).display(), None);
    }

    #[test]
    fn job_posting_defaults_optional_fields() {
        let job: JobPosting = serde_json::from_value(json!({
            "job_id": "abc",
            "title": "Rust Engineer",
            "company": "Ferris Inc",
            "region": "Anywhere"
        }))
        .unwrap();
        assert_eq!(job.salary_range, SALARY_NOT_SPECIFIED);
        assert!(job.skills.is_empty());
        assert!(job.countries.is_empty());
        assert!(job.url.is_none());
        assert_eq!(job.displayed_salary(), None);
    }

    #[test]
    fn displayed_salary_hides_sentinel() {
        let mut job: JobPosting = Faker.fake();
        job.salary_range = "$100k - $120k".to_string();
        assert_eq!(job.displayed_salary(), Some("$100k - $120k"));
        job.salary_range = SALARY_NOT_SPECIFIED.to_string();
        assert_eq!(job.displayed_salary(), None);
        job.salary_range = String::new();
        assert_eq!(job.displayed_salary(), None);
    }

    #[test]
    fn application_link_falls_back_to_posting_url() {
        let mut job: JobPosting = Faker.fake();
        job.apply_url = "https://jobs.example.com/apply/1".to_string();
        job.url = Some("https://jobs.example.com/1".to_string());
        assert_eq!(job.application_link(), Some("https://jobs.example.com/apply/1"));

        job.apply_url = " ".to_string();
        assert_eq!(job.application_link(), Some("https://jobs.example.com/1"));

        job.url = None;
        assert_eq!(job.application_link(), None);
    }

    #[test]
    fn page_result_ignores_echo_fields() {
        let result: PageResult = serde_json::from_value(json!({
            "items": [],
            "total": 0,
            "page": 1,
            "size": 10,
            "pages": 0
        }))
        .unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.pages, 0);
    }
}
