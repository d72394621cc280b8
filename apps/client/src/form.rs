//! The multi-step assessment form.
//!
//! Five steps, walked in order by [`FormWizard`]. Only skills, interests and
//! the derived experience level are sent to the backend; the rest of the form
//! is shown back to the user on the review step.

use thiserror::Error;

use crate::models::AssessmentRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub work_environment: String,
    pub work_style: String,
    pub location: String,
    pub salary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentForm {
    pub name: String,
    pub age: Option<u32>,
    pub education: String,
    pub email: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub interests: Vec<String>,
    pub hobbies: Vec<String>,
    pub strengths: Vec<String>,
    pub preferences: Preferences,
}

/// Splits comma-separated input, trimming entries and dropping blank ones.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl AssessmentForm {
    pub fn set_skills_from_text(&mut self, text: &str) {
        self.skills = split_list(text);
    }

    pub fn set_interests_from_text(&mut self, text: &str) {
        self.interests = split_list(text);
    }

    pub fn set_hobbies_from_text(&mut self, text: &str) {
        self.hobbies = split_list(text);
    }

    /// `"intermediate"` once any work experience is listed.
    pub fn experience_level(&self) -> &'static str {
        if self.experience.is_empty() {
            "beginner"
        } else {
            "intermediate"
        }
    }

    pub fn to_request(&self) -> AssessmentRequest {
        AssessmentRequest {
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            experience_level: self.experience_level().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is required")]
pub struct FormError {
    pub step: FormStep,
    pub field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    PersonalInfo,
    Skills,
    Interests,
    Preferences,
    Review,
}

impl FormStep {
    pub const ALL: [FormStep; 5] = [
        FormStep::PersonalInfo,
        FormStep::Skills,
        FormStep::Interests,
        FormStep::Preferences,
        FormStep::Review,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FormStep::PersonalInfo => "Personal Information",
            FormStep::Skills => "Skills & Expertise",
            FormStep::Interests => "Interests & Hobbies",
            FormStep::Preferences => "Work Preferences",
            FormStep::Review => "Review & Submit",
        }
    }

    /// 1-based position, as shown in the progress bar.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    fn index(self) -> usize {
        FormStep::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Checks the fields this step collects. Review re-checks every earlier step.
    pub fn validate(self, form: &AssessmentForm) -> Result<(), FormError> {
        let missing = |field| Err(FormError { step: self, field });
        match self {
            FormStep::PersonalInfo => {
                if form.name.trim().is_empty() {
                    return missing("Full Name");
                }
                if form.age.is_none() {
                    return missing("Age");
                }
                if form.education.trim().is_empty() {
                    return missing("Education");
                }
                if form.email.trim().is_empty() {
                    return missing("Email");
                }
                Ok(())
            }
            FormStep::Skills if form.skills.is_empty() => missing("Skills"),
            FormStep::Interests if form.interests.is_empty() => missing("Interests"),
            FormStep::Preferences => {
                let prefs = &form.preferences;
                for (field, value) in [
                    ("Work Environment", &prefs.work_environment),
                    ("Work Style", &prefs.work_style),
                    ("Location", &prefs.location),
                    ("Salary", &prefs.salary),
                ] {
                    if value.trim().is_empty() {
                        return missing(field);
                    }
                }
                Ok(())
            }
            FormStep::Review => FormStep::ALL[..self.index()]
                .iter()
                .try_for_each(|step| step.validate(form)),
            FormStep::Skills | FormStep::Interests => Ok(()),
        }
    }
}

/// Walks the form one step at a time. Moving past the first or last step is a no-op.
#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    pub form: AssessmentForm,
    current: usize,
}

impl FormWizard {
    pub fn new(form: AssessmentForm) -> Self {
        Self { form, current: 0 }
    }

    pub fn current(&self) -> FormStep {
        FormStep::ALL[self.current]
    }

    pub fn total_steps(&self) -> usize {
        FormStep::ALL.len()
    }

    /// Validates the current step, then advances. Stays put on error.
    pub fn next(&mut self) -> Result<FormStep, FormError> {
        self.current().validate(&self.form)?;
        if self.current + 1 < FormStep::ALL.len() {
            self.current += 1;
        }
        Ok(self.current())
    }

    pub fn previous(&mut self) -> FormStep {
        self.current = self.current.saturating_sub(1);
        self.current()
    }

    /// Builds the backend request once every step validates.
    pub fn submit(&self) -> Result<AssessmentRequest, FormError> {
        FormStep::Review.validate(&self.form)?;
        Ok(self.form.to_request())
    }
}
