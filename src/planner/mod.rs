//! Mode planner: picks a study session plan from energy and available time.
//!
//! The decision policy is an ordered rule table. Rules are checked top to
//! bottom and the first match wins:
//!
//! | # | Condition                          | Plan                       |
//! |---|------------------------------------|----------------------------|
//! | 1 | exhausted                          | Nap time 0/0 x0            |
//! | 2 | tired, 0 < minutes < 20            | Light review 10/2 x1       |
//! | 3 | focused, minutes >= 90             | Deep study 45/15 x2        |
//! | 4 | focused, 40 <= minutes < 90        | Basic study 30/10 x1       |
//! | 5 | overwhelmed, minutes > 0           | Easy material 15/5 x2      |
//! | - | anything else                      | Standard check-in 25/5 x1  |
//!
//! Only rule 1 ignores minutes. Non-positive minutes match none of rules
//! 2-5 and fall through to the default.
//!
//! Planning never fails. Malformed input degrades to the default plan.

use tracing::debug;

use crate::types::{EnergyState, SessionPlan};

// ============================================================================
// Rule Table
// ============================================================================

/// A single planning rule.
struct Rule {
    /// Short name used in logs
    name: &'static str,
    matches: fn(EnergyState, i64) -> bool,
    description: &'static str,
    work_minutes: u32,
    break_minutes: u32,
    cycles: u32,
}

impl Rule {
    fn to_plan(&self) -> SessionPlan {
        SessionPlan::new(
            self.description,
            self.work_minutes,
            self.break_minutes,
            self.cycles,
        )
    }
}

const RULES: &[Rule] = &[
    Rule {
        name: "exhausted",
        matches: |state, _| state == EnergyState::Exhausted,
        description: "Nap time",
        work_minutes: 0,
        break_minutes: 0,
        cycles: 0,
    },
    Rule {
        name: "tired_short",
        matches: |state, minutes| state == EnergyState::Tired && (1..20).contains(&minutes),
        description: "Light review",
        work_minutes: 10,
        break_minutes: 2,
        cycles: 1,
    },
    Rule {
        name: "focused_long",
        matches: |state, minutes| state == EnergyState::Focused && minutes >= 90,
        description: "Deep study",
        work_minutes: 45,
        break_minutes: 15,
        cycles: 2,
    },
    Rule {
        name: "focused_medium",
        matches: |state, minutes| state == EnergyState::Focused && (40..90).contains(&minutes),
        description: "Basic study",
        work_minutes: 30,
        break_minutes: 10,
        cycles: 1,
    },
    Rule {
        name: "overwhelmed",
        matches: |state, minutes| state == EnergyState::Overwhelmed && minutes > 0,
        description: "Easy material",
        work_minutes: 15,
        break_minutes: 5,
        cycles: 2,
    },
];

/// Plan returned when no rule matches.
const FALLBACK: Rule = Rule {
    name: "fallback",
    matches: |_, _| true,
    description: "Standard check-in",
    work_minutes: 25,
    break_minutes: 5,
    cycles: 1,
};

// ============================================================================
// Public API
// ============================================================================

/// Selects a session plan for the given energy state and available minutes.
///
/// Deterministic and side-effect free apart from a debug log line.
///
/// # Example
///
/// ```
/// use study_buddy::planner::plan;
/// use study_buddy::types::EnergyState;
///
/// let deep = plan(EnergyState::Focused, 90);
/// assert_eq!(deep.description, "Deep study");
/// assert_eq!((deep.work_minutes, deep.break_minutes, deep.cycles), (45, 15, 2));
/// ```
pub fn plan(state: EnergyState, minutes: i64) -> SessionPlan {
    let rule = RULES
        .iter()
        .find(|rule| (rule.matches)(state, minutes))
        .unwrap_or(&FALLBACK);

    debug!(
        state = state.as_str(),
        minutes,
        rule = rule.name,
        "selected study mode"
    );
    rule.to_plan()
}

/// Plans directly from raw prompt answers.
///
/// Unparseable minutes are treated like a non-positive value.
pub fn plan_from_input(state_text: &str, minutes_text: &str) -> SessionPlan {
    let state = EnergyState::parse(state_text);
    let minutes = parse_minutes(minutes_text).unwrap_or(0);
    plan(state, minutes)
}

/// Parses a whole number of minutes, allowing surrounding whitespace and a sign.
///
/// Returns `None` for anything that is not an integer (`"2.5"`, `"soon"`, `""`).
pub fn parse_minutes(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

// ============================================================================
// Tests
// ============================================================================
