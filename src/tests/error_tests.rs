use crate::error::{ErrorContext, ExportError};
use crate::export_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "permission denied"
    ));

    let export_result = result.context("Failed to write project.csv");
    match export_result {
        Err(ExportError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write project.csv"));
            assert!(msg.contains("permission denied"));
        }
        _ => panic!("Expected ExportError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    match option.context("Project id missing") {
        Err(ExportError::Unknown(msg)) => assert_eq!(msg, "Project id missing"),
        _ => panic!("Expected ExportError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no such directory"
    ));

    match result.with_context(|| format!("Failed to write {}", "/missing/project.csv")) {
        Err(ExportError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write /missing/project.csv"));
            assert!(msg.contains("no such directory"));
        }
        _ => panic!("Expected ExportError::Unknown"),
    }
}

#[test]
fn test_export_error_macro() {
    match export_error!(Api, "Bad credentials") {
        ExportError::Api(msg) => assert_eq!(msg, "Bad credentials"),
        _ => panic!("Expected ExportError::Api"),
    }

    match export_error!(Usage, "Could not extract project number from {}", "url") {
        ExportError::Usage(msg) => assert_eq!(msg, "Could not extract project number from url"),
        _ => panic!("Expected ExportError::Usage"),
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ExportError::Api("Bad credentials".to_string()).to_string(),
        "GitHub API error: Bad credentials"
    );
    assert_eq!(
        ExportError::Usage("Missing project url".to_string()).to_string(),
        "Missing project url"
    );
    assert_eq!(
        ExportError::PageLimit(3).to_string(),
        "Pagination did not finish after 3 pages, aborting"
    );
}
