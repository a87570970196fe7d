//! Optimistic vote reconciliation for the post detail view.
//!
//! A vote is applied to the cached post synchronously so the view updates at
//! once, then confirmed with the remote store. The pending mutation keeps the
//! full pre-vote snapshot: a successful confirmation adopts the server's
//! authoritative aggregate, a failed one restores the snapshot verbatim.

use crate::api::PostsApi;
use crate::errors::ApiError;
use crate::models::{Post, VoteRecord, VoteType};

/// What a vote request did to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    /// No prior record: the vote was inserted
    Recorded,
    /// Same direction as the prior record: the vote was withdrawn
    Withdrawn,
    /// Opposite direction: the record flipped
    Switched,
}

/// Apply the toggle/switch vote rule to a post aggregate.
///
/// Pure: the outcome depends only on the inputs. The counter invariant
/// (up/down counters equal the record counts per type) is preserved.
pub fn apply_vote(post: &Post, voter_email: &str, vote: VoteType) -> (Post, VoteAction) {
    let mut next = post.clone();
    let existing = next
        .voters
        .iter()
        .position(|v| v.voter_email == voter_email);

    let action = match existing {
        None => {
            bump(&mut next, vote, 1);
            next.voters.push(VoteRecord {
                voter_email: voter_email.to_string(),
                vote_type: vote,
            });
            VoteAction::Recorded
        }
        Some(i) if next.voters[i].vote_type == vote => {
            bump(&mut next, vote, -1);
            next.voters.remove(i);
            VoteAction::Withdrawn
        }
        Some(i) => {
            let old = next.voters[i].vote_type;
            bump(&mut next, old, -1);
            bump(&mut next, vote, 1);
            next.voters[i].vote_type = vote;
            VoteAction::Switched
        }
    };

    (next, action)
}

fn bump(post: &mut Post, vote: VoteType, delta: i64) {
    match vote {
        VoteType::Up => post.up_vote += delta,
        VoteType::Down => post.down_vote += delta,
    }
}

/// Handle for an in-flight vote, used to match its confirmation.
#[derive(Debug, Clone, Copy)]
pub struct VoteTicket {
    generation: u64,
    action: VoteAction,
}

impl VoteTicket {
    pub fn action(&self) -> VoteAction {
        self.action
    }
}

/// A provisional vote awaiting server confirmation.
#[derive(Debug, Clone)]
struct PendingVote {
    previous: Post,
    generation: u64,
}

/// Owns the cached post for one detail view and reconciles votes against the
/// remote aggregate.
///
/// At most one mutation is in flight at a time; a second `begin` while one is
/// pending is rejected, mirroring the disabled vote control in the view.
#[derive(Debug)]
pub struct VoteReconciler {
    post: Post,
    pending: Option<PendingVote>,
    generation: u64,
}

impl VoteReconciler {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            pending: None,
            generation: 0,
        }
    }

    /// The cached post as the view should currently render it.
    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a vote optimistically. Returns a ticket to be settled with
    /// `commit` or `abort` once the confirmation request resolves.
    pub fn begin(&mut self, voter_email: &str, vote: VoteType) -> Result<VoteTicket, ApiError> {
        if self.pending.is_some() {
            return Err(ApiError::Validation(
                "A vote on this post is still awaiting confirmation".to_string(),
            ));
        }

        let (speculative, action) = apply_vote(&self.post, voter_email, vote);
        self.generation += 1;
        self.pending = Some(PendingVote {
            previous: std::mem::replace(&mut self.post, speculative),
            generation: self.generation,
        });

        Ok(VoteTicket {
            generation: self.generation,
            action,
        })
    }

    /// Settle a confirmed vote with the server's authoritative aggregate.
    /// A stale ticket (superseded by a newer vote) is discarded.
    pub fn commit(&mut self, ticket: VoteTicket, authoritative: Post) {
        let current = self
            .pending
            .as_ref()
            .is_some_and(|p| p.generation == ticket.generation);

        if current {
            self.pending = None;
            self.post = authoritative;
        } else {
            tracing::warn!(
                post_id = %self.post.id,
                "Discarding stale vote confirmation"
            );
        }
    }

    /// Roll back a failed vote, restoring the pre-vote snapshot exactly.
    pub fn abort(&mut self, ticket: VoteTicket) {
        match self.pending.take() {
            Some(pending) if pending.generation == ticket.generation => {
                tracing::warn!(post_id = %pending.previous.id, "Rolling back vote");
                self.post = pending.previous;
            }
            other => {
                self.pending = other;
                tracing::warn!(
                    post_id = %self.post.id,
                    "Ignoring rollback for a vote that is no longer pending"
                );
            }
        }
    }

    /// Apply a vote optimistically and confirm it with the remote store.
    ///
    /// On confirmation failure the cached post is restored to its pre-vote
    /// snapshot and the error is surfaced to the caller.
    pub async fn vote(
        &mut self,
        posts: &PostsApi,
        voter_email: &str,
        vote: VoteType,
    ) -> Result<VoteAction, ApiError> {
        let ticket = self.begin(voter_email, vote)?;
        let confirmation = posts.vote(&self.post.id, voter_email, vote).await;

        match confirmation {
            Ok(authoritative) => {
                self.commit(ticket, authoritative);
                Ok(ticket.action())
            }
            Err(err) => {
                self.abort(ticket);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(up: i64, down: i64, voters: Vec<(&str, VoteType)>) -> Post {
        Post {
            id: "p0".to_string(),
            author_name: "Alice".to_string(),
            author_email: "alice@example.com".to_string(),
            author_image: None,
            title: "Hello".to_string(),
            description: "First post".to_string(),
            tag: "intro".to_string(),
            up_vote: up,
            down_vote: down,
            voters: voters
                .into_iter()
                .map(|(email, vote_type)| VoteRecord {
                    voter_email: email.to_string(),
                    vote_type,
                })
                .collect(),
            created_at: "2025-01-01T00:00:00Z".parse().unwrap(),
            comments: Vec::new(),
            vote_difference: None,
            comments_count: None,
        }
    }

    #[test]
    fn test_toggle_off_round_trip() {
        let baseline = post(3, 1, vec![]);

        let (once, action) = apply_vote(&baseline, "a@x.com", VoteType::Up);
        assert_eq!(action, VoteAction::Recorded);
        assert_eq!(once.up_vote, 4);

        let (twice, action) = apply_vote(&once, "a@x.com", VoteType::Up);
        assert_eq!(action, VoteAction::Withdrawn);
        assert_eq!(twice, baseline);
    }

    #[test]
    fn test_switch_keeps_one_record() {
        let baseline = post(3, 1, vec![]);

        let (up, _) = apply_vote(&baseline, "a@x.com", VoteType::Up);
        let (switched, action) = apply_vote(&up, "a@x.com", VoteType::Down);

        assert_eq!(action, VoteAction::Switched);
        assert_eq!(switched.up_vote, baseline.up_vote);
        assert_eq!(switched.down_vote, baseline.down_vote + 1);
        assert_eq!(switched.voters.len(), 1);
        assert_eq!(switched.vote_of("a@x.com"), Some(VoteType::Down));
    }

    #[test]
    fn test_down_then_up_then_up_scenario() {
        let baseline = post(3, 1, vec![]);

        let (s1, _) = apply_vote(&baseline, "a@x.com", VoteType::Down);
        assert_eq!((s1.up_vote, s1.down_vote), (3, 2));
        assert_eq!(s1.vote_of("a@x.com"), Some(VoteType::Down));

        let (s2, _) = apply_vote(&s1, "a@x.com", VoteType::Up);
        assert_eq!((s2.up_vote, s2.down_vote), (4, 1));
        assert_eq!(s2.vote_of("a@x.com"), Some(VoteType::Up));

        let (s3, _) = apply_vote(&s2, "a@x.com", VoteType::Up);
        assert_eq!((s3.up_vote, s3.down_vote), (3, 1));
        assert_eq!(s3.vote_of("a@x.com"), None);
        assert_eq!(s3, baseline);
    }

    #[test]
    fn test_other_voters_untouched() {
        let baseline = post(2, 0, vec![("b@x.com", VoteType::Up)]);

        let (next, _) = apply_vote(&baseline, "a@x.com", VoteType::Up);
        assert_eq!(next.vote_of("b@x.com"), Some(VoteType::Up));
        assert_eq!(next.voters.len(), 2);
    }

    #[test]
    fn test_counters_match_records() {
        let mut current = post(0, 0, vec![]);
        let moves = [
            ("a@x.com", VoteType::Up),
            ("b@x.com", VoteType::Down),
            ("a@x.com", VoteType::Down),
            ("c@x.com", VoteType::Up),
            ("b@x.com", VoteType::Down),
        ];

        for (email, vote) in moves {
            let (next, _) = apply_vote(&current, email, vote);
            current = next;
            let ups = current
                .voters
                .iter()
                .filter(|v| v.vote_type == VoteType::Up)
                .count() as i64;
            let downs = current
                .voters
                .iter()
                .filter(|v| v.vote_type == VoteType::Down)
                .count() as i64;
            assert_eq!(current.up_vote, ups);
            assert_eq!(current.down_vote, downs);
        }
    }

    #[test]
    fn test_begin_rejects_second_vote_while_pending() {
        let mut rec = VoteReconciler::new(post(3, 1, vec![]));

        rec.begin("a@x.com", VoteType::Up).unwrap();
        assert!(rec.is_pending());

        let err = rec.begin("a@x.com", VoteType::Down).unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_abort_restores_snapshot_exactly() {
        let baseline = post(3, 1, vec![("b@x.com", VoteType::Down)]);
        let mut rec = VoteReconciler::new(baseline.clone());

        let ticket = rec.begin("a@x.com", VoteType::Down).unwrap();
        assert_eq!(rec.post().down_vote, 2);

        rec.abort(ticket);
        assert_eq!(rec.post(), &baseline);
        assert!(!rec.is_pending());
    }

    #[test]
    fn test_commit_adopts_authoritative_state() {
        let mut rec = VoteReconciler::new(post(3, 1, vec![]));

        let ticket = rec.begin("a@x.com", VoteType::Up).unwrap();
        // The server saw a concurrent vote from another session
        let server = post(5, 1, vec![("a@x.com", VoteType::Up)]);
        rec.commit(ticket, server.clone());

        assert_eq!(rec.post(), &server);
        assert!(!rec.is_pending());
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let mut rec = VoteReconciler::new(post(3, 1, vec![]));

        let stale = rec.begin("a@x.com", VoteType::Up).unwrap();
        rec.abort(stale);

        let fresh = rec.begin("a@x.com", VoteType::Down).unwrap();
        let before = rec.post().clone();

        // The first request's response arrives late; it must not clobber the
        // newer pending state.
        rec.commit(stale, post(9, 9, vec![]));
        assert_eq!(rec.post(), &before);
        assert!(rec.is_pending());

        rec.commit(fresh, post(3, 2, vec![("a@x.com", VoteType::Down)]));
        assert_eq!(rec.post().down_vote, 2);
    }
}
