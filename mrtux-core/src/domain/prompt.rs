//! Job questionnaire
//!
//! The questions asked before a job is created, as an ordered list of steps.
//! Front ends (the interactive menu, command-line flags) only decide where
//! the raw text comes from; defaulting and validation live here.

use thiserror::Error;

use super::job::JobAnswers;

/// Which [`JobAnswers`] field a step fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    JobName,
    RepoName,
    Folder,
    Branch,
    HelmDeploy,
}

/// Rejected questionnaire input
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PromptError {
    pub field: JobField,
    pub message: String,
}

/// One question of the questionnaire
#[derive(Debug, Clone, Copy)]
pub struct PromptStep {
    pub field: JobField,
    /// Text shown to the user, without the default hint
    pub label: &'static str,
    /// Used when the answer is empty
    pub default: Option<&'static str>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

pub const DEFAULT_FOLDER: &str = "PROD";
pub const DEFAULT_BRANCH: &str = "main";

/// The job-creation questions, in the order they are asked
pub const JOB_PROMPT_STEPS: [PromptStep; 5] = [
    PromptStep {
        field: JobField::JobName,
        label: "Enter job name",
        default: None,
        validator: Some(validate_job_name),
    },
    PromptStep {
        field: JobField::RepoName,
        label: "Enter Git repository name",
        default: None,
        validator: None,
    },
    PromptStep {
        field: JobField::Folder,
        label: "Enter custom folder",
        default: Some(DEFAULT_FOLDER),
        validator: None,
    },
    PromptStep {
        field: JobField::Branch,
        label: "Enter Git branch",
        default: Some(DEFAULT_BRANCH),
        validator: None,
    },
    PromptStep {
        field: JobField::HelmDeploy,
        label: "Enter Helm deploy name",
        default: None,
        validator: None,
    },
];

impl PromptStep {
    /// Prompt line including the default hint, e.g. `Enter Git branch (default: main): `
    pub fn prompt_text(&self) -> String {
        match self.default {
            Some(default) => format!("{} (default: {}): ", self.label, default),
            None => format!("{}: ", self.label),
        }
    }

    /// Trim, apply the default and validate a raw answer
    pub fn resolve(&self, input: &str) -> Result<String, PromptError> {
        let trimmed = input.trim();
        let value = match (trimmed.is_empty(), self.default) {
            (true, Some(default)) => default.to_string(),
            _ => trimmed.to_string(),
        };

        if let Some(validator) = self.validator {
            validator(&value).map_err(|message| PromptError {
                field: self.field,
                message,
            })?;
        }

        Ok(value)
    }
}

impl JobAnswers {
    /// Store a resolved answer in the field a step targets
    pub fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::JobName => self.job_name = value,
            JobField::RepoName => self.repo_name = value,
            JobField::Folder => self.folder = value,
            JobField::Branch => self.branch = value,
            JobField::HelmDeploy => self.helm_deploy = value,
        }
    }

    /// Run every step against an answer source
    ///
    /// `answer` receives each step in order and returns the raw text for it.
    /// Stops at the first rejected answer.
    pub fn collect<F>(mut answer: F) -> Result<Self, PromptError>
    where
        F: FnMut(&PromptStep) -> String,
    {
        let mut answers = Self::default();
        for step in &JOB_PROMPT_STEPS {
            let value = step.resolve(&answer(step))?;
            answers.set(step.field, value);
        }
        Ok(answers)
    }
}

fn validate_job_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("job name cannot be empty".to_string());
    }
    if name.contains('/') {
        return Err("job name cannot contain '/'".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(field: JobField) -> PromptStep {
        *JOB_PROMPT_STEPS.iter().find(|s| s.field == field).unwrap()
    }

    #[test]
    fn test_step_order() {
        let fields: Vec<_> = JOB_PROMPT_STEPS.iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec![
                JobField::JobName,
                JobField::RepoName,
                JobField::Folder,
                JobField::Branch,
                JobField::HelmDeploy,
            ]
        );
    }

    #[test]
    fn test_empty_folder_defaults_to_prod() {
        assert_eq!(step(JobField::Folder).resolve("").unwrap(), "PROD");
        assert_eq!(step(JobField::Folder).resolve("   ").unwrap(), "PROD");
    }

    #[test]
    fn test_empty_branch_defaults_to_main() {
        assert_eq!(step(JobField::Branch).resolve("\n").unwrap(), "main");
        assert_eq!(step(JobField::Branch).resolve(" dev ").unwrap(), "dev");
    }

    #[test]
    fn test_fields_without_default_stay_empty() {
        assert_eq!(step(JobField::HelmDeploy).resolve("").unwrap(), "");
        assert_eq!(step(JobField::RepoName).resolve("").unwrap(), "");
    }

    #[test]
    fn test_job_name_validation() {
        let job = step(JobField::JobName);
        assert!(job.resolve("").is_err());
        assert!(job.resolve("a/b").is_err());
        assert_eq!(job.resolve(" demo ").unwrap(), "demo");
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            step(JobField::Folder).prompt_text(),
            "Enter custom folder (default: PROD): "
        );
        assert_eq!(step(JobField::JobName).prompt_text(), "Enter job name: ");
    }

    #[test]
    fn test_collect_answers() {
        let mut inputs = vec!["demo", "demo-repo", "", "", "demo-helm"].into_iter();
        let answers = JobAnswers::collect(|_| inputs.next().unwrap().to_string()).unwrap();

        assert_eq!(
            answers,
            JobAnswers {
                job_name: "demo".to_string(),
                repo_name: "demo-repo".to_string(),
                folder: "PROD".to_string(),
                branch: "main".to_string(),
                helm_deploy: "demo-helm".to_string(),
            }
        );
    }

    #[test]
    fn test_collect_stops_on_invalid_answer() {
        let mut asked = 0;
        let err = JobAnswers::collect(|_| {
            asked += 1;
            String::new()
        })
        .unwrap_err();

        assert_eq!(asked, 1);
        assert_eq!(err.field, JobField::JobName);
        assert_eq!(err.to_string(), "job name cannot be empty");
    }
}
