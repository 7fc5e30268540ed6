use chrono::{DateTime, Utc};
use hyperfleet_domain::ResourceCondition;

/// Reconcile a freshly computed condition's timestamps against whatever was
/// previously stored under the same type (§4.4).
///
/// `target` already carries its computed `status`/`observed_generation`/
/// `reason`/`message`, with all three timestamps defaulted to `now` by the
/// caller. This function only decides whether to keep those defaults or
/// pull timestamps (and absent reason/message) forward from `existing`.
pub fn merge_condition_timestamps(
    target: &mut ResourceCondition,
    existing: Option<&ResourceCondition>,
    now: DateTime<Utc>,
) {
    let Some(existing) = existing else {
        return;
    };

    if existing.status == target.status && existing.observed_generation == target.observed_generation {
        target.created_time = existing.created_time;
        target.last_transition_time = existing.last_transition_time;
        target.last_updated_time = existing.last_updated_time;
        if target.reason.is_none() {
            target.reason = existing.reason.clone();
        }
        if target.message.is_none() {
            target.message = existing.message.clone();
        }
        return;
    }

    target.created_time = existing.created_time;
    target.last_transition_time = now;
    target.last_updated_time = now;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperfleet_domain::{ConditionStatus, AVAILABLE};

    fn cond(status: ConditionStatus, gen: i64, created: DateTime<Utc>, transition: DateTime<Utc>, updated: DateTime<Utc>) -> ResourceCondition {
        ResourceCondition {
            condition_type: AVAILABLE.to_string(),
            status,
            observed_generation: gen,
            reason: None,
            message: None,
            created_time: created,
            last_transition_time: transition,
            last_updated_time: updated,
        }
    }

    #[test]
    fn absent_existing_leaves_defaults() {
        let now = Utc::now();
        let mut target = cond(ConditionStatus::True, 1, now, now, now);
        merge_condition_timestamps(&mut target, None, now);
        assert_eq!(target.created_time, now);
        assert_eq!(target.last_transition_time, now);
    }

    #[test]
    fn idempotent_update_preserves_all_timestamps() {
        let created = Utc::now() - chrono::Duration::hours(5);
        let transitioned = Utc::now() - chrono::Duration::hours(1);
        let updated = Utc::now() - chrono::Duration::minutes(30);
        let existing = cond(ConditionStatus::True, 1, created, transitioned, updated);

        let now = Utc::now();
        let mut target = cond(ConditionStatus::True, 1, now, now, now);
        merge_condition_timestamps(&mut target, Some(&existing), now);

        assert_eq!(target.created_time, created);
        assert_eq!(target.last_transition_time, transitioned);
        assert_eq!(target.last_updated_time, updated);
    }

    #[test]
    fn real_transition_advances_transition_and_updated_but_not_created() {
        let created = Utc::now() - chrono::Duration::hours(5);
        let existing = cond(ConditionStatus::False, 0, created, created, created);

        let now = Utc::now();
        let mut target = cond(ConditionStatus::True, 1, now, now, now);
        merge_condition_timestamps(&mut target, Some(&existing), now);

        assert_eq!(target.created_time, created);
        assert_eq!(target.last_transition_time, now);
        assert_eq!(target.last_updated_time, now);
    }

    #[test]
    fn idempotent_update_fills_in_absent_reason_and_message() {
        let created = Utc::now();
        let mut existing = cond(ConditionStatus::True, 1, created, created, created);
        existing.reason = Some("AllAdaptersReady".into());
        existing.message = Some("all required adapters reported Available".into());

        let now = Utc::now();
        let mut target = cond(ConditionStatus::True, 1, now, now, now);
        merge_condition_timestamps(&mut target, Some(&existing), now);

        assert_eq!(target.reason.as_deref(), Some("AllAdaptersReady"));
        assert_eq!(target.message.as_deref(), Some("all required adapters reported Available"));
    }
}
