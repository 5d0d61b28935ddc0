pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".github-project-csv.json";
pub const TOKEN_ENV_VAR: &str = "GITHUB_PROJECT_CSV_TOKEN";
pub const USER_AGENT: &str = concat!("github-project-csv/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_PAGES: usize = 10_000;

pub const CSV_DELIMITER: u8 = b';';

pub const ORGANIZATION_PROJECT_QUERY: &str = r#"
    query($login: String!, $number: Int!) {
        organization(login: $login) {
            projectV2(number: $number) {
                id
            }
        }
    }
"#;

pub const USER_PROJECT_QUERY: &str = r#"
    query($login: String!, $number: Int!) {
        user(login: $login) {
            projectV2(number: $number) {
                id
            }
        }
    }
"#;

// Every field value fragment selects the field name through ProjectV2FieldCommon
pub const PROJECT_ITEMS_QUERY: &str = r#"
    query($id: ID!, $first: Int!, $after: String) {
        node(id: $id) {
            ... on ProjectV2 {
                items(first: $first, after: $after) {
                    pageInfo {
                        endCursor
                        hasNextPage
                    }
                    nodes {
                        id
                        content {
                            __typename
                            ... on DraftIssue {
                                title
                            }
                            ... on Issue {
                                number
                                url
                                labels(first: 20) {
                                    nodes {
                                        name
                                    }
                                }
                            }
                            ... on PullRequest {
                                number
                                url
                                labels(first: 20) {
                                    nodes {
                                        name
                                    }
                                }
                            }
                        }
                        fieldValues(first: 50) {
                            nodes {
                                ... on ProjectV2ItemFieldTextValue {
                                    text
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldNumberValue {
                                    number
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldDateValue {
                                    date
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldIterationValue {
                                    title
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldSingleSelectValue {
                                    name
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldMilestoneValue {
                                    milestone {
                                        title
                                    }
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldRepositoryValue {
                                    repository {
                                        name
                                    }
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                                ... on ProjectV2ItemFieldUserValue {
                                    users(first: 10) {
                                        nodes {
                                            login
                                        }
                                    }
                                    field { ... on ProjectV2FieldCommon { name } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
"#;
