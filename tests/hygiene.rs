//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the engine's `src/` tree for antipatterns that would let a
//! pointer event crash the page, silently drop an error, or bypass `tracing`.
//! Every budget is zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics. These abort the wasm instance.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or handle the None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or handle the None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "return an error instead" },
    Budget { pattern: "unreachable!(", max: 0, why: "restructure the match" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

// Silent loss. Discards errors without inspecting.
const SILENT: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "inspect the result" },
    Budget { pattern: ".ok()", max: 0, why: "inspect the error" },
];

// Output. Logging goes through `tracing`.
const OUTPUT: &[Budget] = &[
    Budget { pattern: "println!(", max: 0, why: "use tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "use tracing" },
    Budget { pattern: "dbg!(", max: 0, why: "remove debugging output" },
];

// Style / structure.
const STRUCTURE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the dead code" },
    Budget { pattern: "static mut", max: 0, why: "state lives in EngineCore" },
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|l| l.contains(budget.pattern)).count();
                (count > 0).then(|| format!("  {path}: {count}"))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|(_, c)| c.lines().filter(|l| l.contains(budget.pattern)).count())
            .sum();
        if total > budget.max {
            failures.push(format!(
                "`{}` budget exceeded: found {total}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(SILENT);
}

#[test]
fn output_budget() {
    check(OUTPUT);
}

#[test]
fn structure_budget() {
    check(STRUCTURE);
}
