use std::fmt;
use regex::Regex;

use crate::error::{ExportError, ExportResult};

lazy_static::lazy_static! {
    static ref PROJECT_URL: Regex =
        Regex::new(r"https://github\.com/(orgs|users)/([^/]+)/projects/([^/]*)")
            .expect("project url pattern is valid");
}

/// Who owns a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOwner {
    Organization(String),
    User(String),
}

impl ProjectOwner {
    pub fn login(&self) -> &str {
        match self {
            ProjectOwner::Organization(login) | ProjectOwner::User(login) => login,
        }
    }
}

/// A project board addressed by owner and number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub owner: ProjectOwner,
    pub number: u32,
}

impl ProjectRef {
    /// Build a reference from separately supplied owners. Exactly one of
    /// `org` and `user` must be given.
    pub fn from_parts(org: Option<String>, user: Option<String>, number: u32) -> ExportResult<Self> {
        let owner = match (org, user) {
            (Some(org), None) => ProjectOwner::Organization(org),
            (None, Some(user)) => ProjectOwner::User(user),
            (None, None) => return Err(ExportError::Usage("Neither user nor org given".to_string())),
            (Some(_), Some(_)) => {
                return Err(ExportError::Usage("Give either a user or an org, not both".to_string()))
            }
        };

        if number == 0 {
            return Err(ExportError::Usage("Project number must be a positive integer".to_string()));
        }

        Ok(Self { owner, number })
    }

    /// Parse `https://github.com/orgs/<org>/projects/<n>` or
    /// `https://github.com/users/<user>/projects/<n>`. Anything after the
    /// number, such as `/views/1`, is ignored.
    pub fn from_url(url: &str) -> ExportResult<Self> {
        let captures = PROJECT_URL.captures(url).ok_or_else(|| {
            ExportError::Usage("Could not extract org or user from project url".to_string())
        })?;

        let login = captures[2].to_string();
        let number = leading_number(&captures[3]).ok_or_else(|| {
            ExportError::Usage("Could not extract project number from project url".to_string())
        })?;

        match &captures[1] {
            "orgs" => Self::from_parts(Some(login), None, number),
            _ => Self::from_parts(None, Some(login), number),
        }
    }
}

// "3?query" and "3#anchor" still name project 3
fn leading_number(segment: &str) -> Option<u32> {
    let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u32>().ok().filter(|number| *number > 0)
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            ProjectOwner::Organization(org) => write!(f, "orgs/{}/projects/{}", org, self.number),
            ProjectOwner::User(user) => write!(f, "users/{}/projects/{}", user, self.number),
        }
    }
}
