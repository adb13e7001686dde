//! `plattr routes` – print the back-navigation table.

use plattr_core::routes::{PatternRule, NAVIGATION_MAP, PATTERN_RULES};

pub fn run_routes() {
    println!("{:<24} {}", "FROM", "BACK TO");
    for (from, to) in NAVIGATION_MAP {
        println!("{:<24} {}", from, to);
    }
    println!();
    println!("Pattern rules (in order):");
    for (i, rule) in PATTERN_RULES.iter().enumerate() {
        let line = match rule {
            PatternRule::CategoryDetail { segment } => {
                format!("/{}/{{token}}/..  ->  /categories/{{token}}", segment)
            }
            PatternRule::Prefix { segments, to } => {
                format!("/{}/..  ->  {}", segments.join("/"), to)
            }
        };
        println!("  {}. {}", i + 1, line);
    }
    println!("  *. anything else  ->  /");
}
