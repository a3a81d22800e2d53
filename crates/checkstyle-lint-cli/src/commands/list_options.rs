//! List options command implementation.

use checkstyle_lint::{merge_options, CheckstyleLinter, Linter, LinterSettings};

/// Runs the list-options command.
pub fn run() {
    let linter = CheckstyleLinter::new();
    let options = merge_options(linter.configuration_options(), LinterSettings::options());

    println!("{}: {}\n", linter.name(), linter.description());
    println!(
        "Options go under [linters.{}] in checkstyle-lint.toml:\n",
        linter.configuration_name()
    );
    println!("{:<20} {:<22} Description", "Key", "Type");
    println!("{}", "-".repeat(80));

    for (key, option) in &options {
        println!("{:<20} {:<22} {}", key, option.kind, option.help);
    }
}
