use clap::{value_parser, Arg, ArgAction, Command};

use crate::constants::MAX_PAGE_SIZE;

pub fn build_cli() -> Command {
    Command::new("github-project-csv")
        .about("Export a GitHub project board (issues, pull requests, drafts and custom fields) to CSV")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("project")
                .long("project")
                .value_name("URL")
                .help("Url of the github project, e.g. https://github.com/users/fiedl/projects/2")
                .required(true)
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILENAME")
                .help("Name of the csv file to export the project to, e.g. project.csv (default: print to stdout)")
        )
        .arg(
            Arg::new("personal-access-token")
                .long("personal-access-token")
                .visible_alias("token")
                .value_name("TOKEN")
                .help("Personal access token for github, https://github.com/settings/tokens?type=beta (default: use the gh command line client)")
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_name("NUMBER")
                .help("Items requested per page")
                .value_parser(value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print log lines to stderr")
                .action(ArgAction::SetTrue)
        )
}
