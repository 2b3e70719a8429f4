//! Console messages for one-shot commands
//!
//! `configure`, `reset`, `scan`, `pitch` and friends print through these
//! helpers so every command shares the same tag colors.

const TAG_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const TAG_WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const TAG_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_INFO, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_WARN, title, details));
}

/// Errors go to stderr so piped report output stays clean.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", TAG_ERROR, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_SUCCESS, title, details));
}

/// Bold underlined heading for a block of report output.
pub fn print_heading(title: &str) {
    println!("\n\x1b[1;4m{}\x1b[0m", title);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
