//! Faculty review transitions.
//!
//! ```text
//! pending ──approve──▶ approved ◀──edit──┐
//!    │                    │              │
//!    └────reject───▶ rejected ◀──edit────┘
//! ```
//!
//! Both terminal states can be re-reviewed into either terminal state with new
//! points and remarks. Nothing ever returns to `pending`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::{Reviewable, Status};
use crate::review::points::parse_points;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("a review decision is required")]
    MissingDecision,

    #[error("unknown review decision '{0}'")]
    UnknownDecision(String),

    #[error("a reviewed item cannot be returned to pending")]
    ReturnToPending,

    #[error("approval requires a points value")]
    MissingPoints,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    fn status(self) -> Status {
        match self {
            Decision::Approved => Status::Approved,
            Decision::Rejected => Status::Rejected,
        }
    }
}

/// Points as submitted: a JSON integer, a float, raw form text, or anything
/// else. Nothing here fails deserialization; unusable values coerce to 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PointsInput {
    Number(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PointsInput {
    fn coerce(&self) -> u32 {
        match self {
            PointsInput::Number(n) => u32::try_from(*n).unwrap_or(0),
            PointsInput::Float(f) if f.is_finite() && *f >= 0.0 && *f < u32::MAX as f64 + 1.0 => {
                f.trunc() as u32
            }
            PointsInput::Float(_) => 0,
            PointsInput::Text(raw) => parse_points(raw),
            PointsInput::Other(_) => 0,
        }
    }
}

/// Review form as submitted by a reviewer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub decision: String,
    #[serde(default)]
    pub points: Option<PointsInput>,
    #[serde(default)]
    pub remarks: String,
}

/// A validated review ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub decision: Decision,
    pub points: u32,
    pub remarks: String,
}

impl TryFrom<ReviewRequest> for Review {
    type Error = ReviewError;

    fn try_from(request: ReviewRequest) -> Result<Self, Self::Error> {
        let decision = match request.decision.trim().to_lowercase().as_str() {
            "" => return Err(ReviewError::MissingDecision),
            "approved" | "approve" => Decision::Approved,
            "rejected" | "reject" => Decision::Rejected,
            "pending" => return Err(ReviewError::ReturnToPending),
            _ => return Err(ReviewError::UnknownDecision(request.decision)),
        };

        let points = match (decision, &request.points) {
            (Decision::Approved, None) => return Err(ReviewError::MissingPoints),
            (Decision::Approved, Some(input)) => input.coerce(),
            (Decision::Rejected, _) => 0,
        };

        Ok(Review {
            decision,
            points,
            remarks: request.remarks,
        })
    }
}

/// Applies `review` to `item`, stamping the reviewer and time.
/// Rejection always zeroes points.
pub fn apply_review<T: Reviewable>(
    item: &mut T,
    review: &Review,
    reviewer: &str,
    at: DateTime<Utc>,
) -> Status {
    let from = item.status();
    let previous_points = item.points();
    let to = review.decision.status();
    let points = match review.decision {
        Decision::Approved => review.points,
        Decision::Rejected => 0,
    };

    item.record_review(
        to,
        points,
        review.remarks.clone(),
        reviewer.to_string(),
        at,
    );

    info!("Review by {reviewer}: {from} ({previous_points} points) -> {to} ({points} points)");
    to
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Activity;

    fn pending_activity() -> Activity {
        fixtures::activities()
            .into_iter()
            .find(|a| a.status == Status::Pending)
            .unwrap()
    }

    fn request(decision: &str, points: Option<PointsInput>, remarks: &str) -> ReviewRequest {
        ReviewRequest {
            decision: decision.to_string(),
            points,
            remarks: remarks.to_string(),
        }
    }

    #[test]
    fn test_approve_sets_points_remarks_and_stamp() {
        let mut activity = pending_activity();
        let review = Review::try_from(request("approved", Some(PointsInput::Number(50)), "ok")).unwrap();
        let now = Utc::now();

        let status = apply_review(&mut activity, &review, "Dr. Priya Patel", now);

        assert_eq!(status, Status::Approved);
        assert_eq!(activity.status, Status::Approved);
        assert_eq!(activity.points, 50);
        assert_eq!(activity.faculty_remarks.as_deref(), Some("ok"));
        assert_eq!(activity.approved_by.as_deref(), Some("Dr. Priya Patel"));
        assert_eq!(activity.approved_at, Some(now));
    }

    #[test]
    fn test_reject_forces_zero_points() {
        let mut activity = pending_activity();
        assert!(activity.points > 0);
        let review = Review::try_from(request("rejected", Some(PointsInput::Number(70)), "no proof")).unwrap();

        apply_review(&mut activity, &review, "Dr. Priya Patel", Utc::now());

        assert_eq!(activity.status, Status::Rejected);
        assert_eq!(activity.points, 0);
        assert_eq!(activity.faculty_remarks.as_deref(), Some("no proof"));
    }

    #[test]
    fn test_terminal_states_can_be_re_reviewed() {
        let mut activity = pending_activity();
        let reject = Review::try_from(request("rejected", None, "missing document")).unwrap();
        apply_review(&mut activity, &reject, "Dr. Priya Patel", Utc::now());

        let approve = Review::try_from(request("approved", Some(PointsInput::Text("35".into())), "document added")).unwrap();
        apply_review(&mut activity, &approve, "Dr. Priya Patel", Utc::now());

        assert_eq!(activity.status, Status::Approved);
        assert_eq!(activity.points, 35);
        assert_eq!(activity.faculty_remarks.as_deref(), Some("document added"));
    }

    #[test]
    fn test_pending_is_never_a_target() {
        assert_eq!(
            Review::try_from(request("pending", Some(PointsInput::Number(10)), "")),
            Err(ReviewError::ReturnToPending)
        );
    }

    #[test]
    fn test_decision_is_required() {
        assert_eq!(
            Review::try_from(request("  ", Some(PointsInput::Number(10)), "")),
            Err(ReviewError::MissingDecision)
        );
        assert!(matches!(
            Review::try_from(request("maybe", None, "")),
            Err(ReviewError::UnknownDecision(_))
        ));
    }

    #[test]
    fn test_approval_requires_points_but_rejection_does_not() {
        assert_eq!(
            Review::try_from(request("approved", None, "")),
            Err(ReviewError::MissingPoints)
        );
        assert!(Review::try_from(request("rejected", None, "")).is_ok());
    }

    #[test]
    fn test_malformed_points_coerce_to_zero() {
        let review = Review::try_from(request("approved", Some(PointsInput::Text("lots".into())), "")).unwrap();
        assert_eq!(review.points, 0);

        let review = Review::try_from(request("approved", Some(PointsInput::Number(-3)), "")).unwrap();
        assert_eq!(review.points, 0);
    }

    #[test]
    fn test_review_request_accepts_numeric_or_text_points() {
        let numeric: ReviewRequest =
            serde_json::from_str(r#"{"decision": "approved", "points": 50, "remarks": "ok"}"#).unwrap();
        assert_eq!(Review::try_from(numeric).unwrap().points, 50);

        let text: ReviewRequest =
            serde_json::from_str(r#"{"decision": "approved", "points": "40", "remarks": "ok"}"#).unwrap();
        assert_eq!(Review::try_from(text).unwrap().points, 40);
    }

    #[test]
    fn test_float_points_truncate_and_out_of_range_becomes_zero() {
        let cases = [
            (r#"{"decision": "approved", "points": 50.5}"#, 50),
            (r#"{"decision": "approved", "points": 0.9}"#, 0),
            (r#"{"decision": "approved", "points": 1e20}"#, 0),
            (r#"{"decision": "approved", "points": -2.5}"#, 0),
            (r#"{"decision": "approved", "points": 18446744073709551615}"#, 0),
        ];
        for (body, expected) in cases {
            let request: ReviewRequest = serde_json::from_str(body).unwrap();
            assert_eq!(Review::try_from(request).unwrap().points, expected, "{body}");
        }
    }

    #[test]
    fn test_non_numeric_json_points_coerce_to_zero() {
        for points in ["true", "[30]", r#"{"value": 30}"#] {
            let body = format!(r#"{{"decision": "approved", "points": {points}}}"#);
            let request: ReviewRequest = serde_json::from_str(&body).unwrap();
            assert!(matches!(request.points, Some(PointsInput::Other(_))));
            assert_eq!(Review::try_from(request).unwrap().points, 0);
        }
    }
}
