//! Auto-fill rules are the reactive half of the form. Each rule watches a few
//! input fields and, when one of them changes, proposes derived writes to
//! other fields. Rules never touch the record themselves: they look at it and
//! hand back a [Changeset] that the caller applies, much like the rest of this
//! crate hands back modifications instead of doing storage.
//!
//! Every rule must be idempotent. Evaluating a rule against a record that
//! already satisfies it proposes nothing, which is also what lets [Rules::react]
//! cascade safely.
//!
//! [Changeset]: ../models/change/struct.Changeset.html
//! [Rules::react]: struct.Rules.html#method.react

use crate::{
    config::FormConfig,
    models::{
        change::Changeset,
        field::Field,
        record::Record,
    },
};
use log::{debug, warn};

pub mod category;
pub mod representative;

pub use category::CategoryExclusivity;
pub use representative::RepresentativeShorthand;

/// How many rounds of derived writes we'll follow before giving up. The
/// standard rules settle after one.
const MAX_PASSES: usize = 8;

/// An auto-fill rule.
pub trait Rule {
    /// A short name for logging and for tagging the changes this rule makes.
    fn name(&self) -> &'static str;

    /// The fields this rule watches. A write to any of these (that actually
    /// changes the value) re-evaluates the rule.
    fn inputs(&self) -> &[Field];

    /// Look at the record and propose writes. Only writes that change a
    /// value are returned.
    fn evaluate(&self, record: &Record) -> Changeset;

    /// Whether this rule cares about any of the fields in the changeset.
    fn is_triggered_by(&self, changes: &Changeset) -> bool {
        changes.iter()
            .filter(|change| !change.is_noop())
            .any(|change| self.inputs().contains(change.field()))
    }
}

/// An ordered set of rules, evaluated in order.
pub struct Rules {
    rules: Vec<Box<dyn Rule>>,
}

impl Rules {
    /// A rule set with nothing in it.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The rules the hiring unit form runs.
    pub fn standard(config: &FormConfig) -> Self {
        Self::empty()
            .with(CategoryExclusivity)
            .with(RepresentativeShorthand::from_config(config))
    }

    /// Add a rule to the end of the set.
    pub fn with<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run `rules` (or every rule, if `changes` is `None`) against the record,
    /// applying what they propose as we go.
    fn pass(&self, record: &mut Record, changes: Option<&Changeset>) -> Changeset {
        let mut derived = Changeset::new();
        for rule in &self.rules {
            if let Some(changes) = changes {
                if !rule.is_triggered_by(changes) {
                    continue;
                }
            }
            let proposed = rule.evaluate(record);
            for change in proposed.iter() {
                debug!("rule `{}`: {} {:?} -> {:?}", rule.name(), change.field(), change.from(), change.to());
            }
            proposed.apply(record);
            derived.extend(proposed);
        }
        derived
    }

    /// React to a set of writes that were just applied to `record`: run each
    /// rule watching a changed field, apply its writes, then keep going with
    /// whatever those writes changed until nothing new happens. Returns every
    /// derived change, in the order it was applied.
    pub fn react(&self, record: &mut Record, changes: &Changeset) -> Changeset {
        let mut all = Changeset::new();
        let mut pending = self.pass(record, Some(changes));
        let mut passes = 1;
        while !pending.is_empty() {
            if passes >= MAX_PASSES {
                warn!("rules did not settle after {} passes, stopping", passes);
                all.extend(pending);
                break;
            }
            let next = self.pass(record, Some(&pending));
            all.extend(pending);
            pending = next;
            passes += 1;
        }
        all
    }

    /// Evaluate every rule once regardless of what changed (and then follow
    /// any cascade). Used when a record is loaded wholesale rather than edited
    /// a field at a time.
    pub fn settle(&self, record: &mut Record) -> Changeset {
        let first = self.pass(record, None);
        let rest = self.react(record, &first);
        let mut all = first;
        all.extend(rest);
        all
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard(&FormConfig::default())
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::change::{Change, Origin};

    /// A rule that never settles, to make sure we don't spin forever.
    struct Flipper;

    impl Rule for Flipper {
        fn name(&self) -> &'static str { "flipper" }
        fn inputs(&self) -> &[Field] { &[Field::Current] }
        fn evaluate(&self, record: &Record) -> Changeset {
            let next = if record.current() == "a" { "b" } else { "a" };
            Changeset::new_single(Change::new(Field::Current, record.current().as_str(), next, Origin::Rule(self.name())))
        }
    }

    fn user_write(record: &mut Record, field: Field, val: &str) -> Changeset {
        let from = record.set(field, val);
        Changeset::new_single(Change::new(field, from.as_str(), val, Origin::User))
    }

    #[test]
    fn standard_set() {
        let rules = Rules::default();
        assert_eq!(rules.len(), 2);
        assert_eq!(format!("{:?}", rules), "[\"category exclusivity\", \"representative shorthand\"]");
        assert!(Rules::empty().is_empty());
    }

    #[test]
    fn only_triggered_rules_run() {
        let rules = Rules::default();
        let mut record = Record::new();
        record.set(Field::Staff, "Yes");
        // nothing watched changed, so the category rule stays quiet
        let changes = user_write(&mut record, Field::Middle, "Q");
        let derived = rules.react(&mut record, &changes);
        assert!(derived.is_empty());
        assert_eq!(record.volunteer(), "");

        let changes = user_write(&mut record, Field::Staff, "yes");
        let derived = rules.react(&mut record, &changes);
        assert_eq!(derived.len(), 4);
        assert_eq!(record.volunteer(), "No");
    }

    #[test]
    fn noop_writes_dont_trigger() {
        let rules = Rules::default();
        let mut record = Record::new();
        let changes = user_write(&mut record, Field::RepTimekeeperName, "NA");
        rules.react(&mut record, &changes);
        assert_eq!(record.rep_phone(), "NA");

        record.set(Field::RepPhone, "831-555-0100");
        let changes = user_write(&mut record, Field::RepTimekeeperName, "NA");
        assert!(rules.react(&mut record, &changes).is_empty());
        assert_eq!(record.rep_phone(), "831-555-0100");
    }

    #[test]
    fn settle_runs_everything() {
        let rules = Rules::default();
        let mut record = Record::builder()
            .ucsc_student("Yes")
            .rep_timekeeper_name(" n/a ")
            .finish().unwrap();
        let derived = rules.settle(&mut record);
        assert_eq!(derived.len(), 6);
        assert_eq!(record.staff(), "No");
        assert_eq!(record.ucsc_student(), "Yes");
        assert_eq!(record.rep_email(), "no_email_given@ucsc.edu");
        assert!(rules.settle(&mut record).is_empty());
    }

    #[test]
    fn cascade_is_bounded() {
        let rules = Rules::empty().with(Flipper);
        let mut record = Record::new();
        let changes = user_write(&mut record, Field::Current, "x");
        let derived = rules.react(&mut record, &changes);
        assert_eq!(derived.len(), MAX_PASSES);
    }
}
