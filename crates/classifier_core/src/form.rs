use serde::{Deserialize, Serialize};

/// The five text fields of a job posting, exactly as sent on the wire.
///
/// Every field is always present (possibly empty) when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company_profile: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
}

impl JobRecord {
    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::CompanyProfile => &self.company_profile,
            JobField::Description => &self.description,
            JobField::Requirements => &self.requirements,
            JobField::Benefits => &self.benefits,
        }
    }

    /// Overwrites one field. No cross-field validation happens here.
    pub fn set(&mut self, field: JobField, value: impl Into<String>) {
        let slot = match field {
            JobField::Title => &mut self.title,
            JobField::CompanyProfile => &mut self.company_profile,
            JobField::Description => &mut self.description,
            JobField::Requirements => &mut self.requirements,
            JobField::Benefits => &mut self.benefits,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        JobField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    Title,
    CompanyProfile,
    Description,
    Requirements,
    Benefits,
}

impl JobField {
    /// Form order.
    pub const ALL: [JobField; 5] = [
        JobField::Title,
        JobField::CompanyProfile,
        JobField::Description,
        JobField::Requirements,
        JobField::Benefits,
    ];

    /// JSON key used by the classification service.
    pub fn key(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::CompanyProfile => "company_profile",
            JobField::Description => "description",
            JobField::Requirements => "requirements",
            JobField::Benefits => "benefits",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        JobField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            JobField::Title => "Job Title",
            JobField::CompanyProfile => "Company Profile",
            JobField::Description => "Job Description",
            JobField::Requirements => "Requirements",
            JobField::Benefits => "Benefits",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, JobField::Title | JobField::Description)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            JobField::Title => "e.g., Software Engineer, Marketing Manager",
            JobField::CompanyProfile => "Brief description of the company...",
            JobField::Description => {
                "Detailed description of the job role and responsibilities..."
            }
            JobField::Requirements => "Skills, experience, and qualifications required...",
            JobField::Benefits => "Benefits offered to employees...",
        }
    }
}

/// Fixed illustrative posting used by the "load sample" action.
pub fn sample_job_record() -> JobRecord {
    JobRecord {
        title: "Software Engineer".to_string(),
        company_profile: "Leading tech company with 10+ years in the industry".to_string(),
        description: "We are looking for a passionate software engineer to join our team. \
                      You will work on cutting-edge projects and collaborate with talented \
                      developers."
            .to_string(),
        requirements: "Bachelor's degree in Computer Science, 3+ years of experience with \
                       Python, JavaScript, and React"
            .to_string(),
        benefits: "Competitive salary, health insurance, dental coverage, 401k matching, \
                   flexible work hours"
            .to_string(),
    }
}
