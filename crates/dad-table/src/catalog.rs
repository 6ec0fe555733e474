//! The default English message catalog and record rendering.
//!
//! The engine deals in [`MessageKey`]s; this module is the localization
//! seam. Swapping the catalog swaps the language without touching any
//! resolution code. Rendering mirrors the table's chat card: title, move
//! details, drawn tokens, outcome, token change, new totals, and warnings.

use dad_core::TokenKind;
use dad_draw::{FailureKind, MessageKey, MoveRecord, Outcome};

/// English text for a message key.
pub fn message_text(key: MessageKey) -> &'static str {
    match key {
        MessageKey::OutcomeSuccess => "The move succeeds. Gain one token of the approach.",
        MessageKey::OutcomeFailure => "The move fails. One drawn opposing token is discarded.",
        MessageKey::OutcomeMixedSuccess => "The move succeeds, at a cost. Discard one drawn token.",
        MessageKey::OutcomeMixedFail => "Too difficult. The move fails; discard one drawn token.",
        MessageKey::DefiningFailure => "A defining moment gone wrong: all drawn tokens are lost.",
        MessageKey::BecameDeadbeat => "No law tokens left. This dad has failed as a deadbeat.",
        MessageKey::BecameHardass => "No chaos tokens left. This dad has failed as a hardass.",
        MessageKey::CharacterFailed => "Both pools are empty. This dad has completely failed.",
        MessageKey::MaxTokensReached => "Maximum tokens reached; the gain is discarded.",
        MessageKey::NotEnoughTokens => "Not enough tokens in the pool for that difficulty.",
    }
}

/// Capitalized label for a token kind.
pub fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Law => "Law",
        TokenKind::Chaos => "Chaos",
    }
}

/// The warning line for a terminal failure.
pub fn failure_text(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Deadbeat => message_text(MessageKey::BecameDeadbeat),
        FailureKind::Hardass => message_text(MessageKey::BecameHardass),
        FailureKind::Both => message_text(MessageKey::CharacterFailed),
    }
}

/// The outcome announcement for a record: the outcome's own message, with
/// the defining-failure escalation appended when it applied.
pub fn outcome_message(record: &MoveRecord) -> String {
    let key = match record.outcome {
        Outcome::Success => MessageKey::OutcomeSuccess,
        Outcome::Failure => MessageKey::OutcomeFailure,
        Outcome::MixedSuccess => MessageKey::OutcomeMixedSuccess,
        Outcome::MixedFail => MessageKey::OutcomeMixedFail,
    };
    let mut text = message_text(key).to_string();
    if record.defining && record.outcome.is_failure() {
        text.push(' ');
        text.push_str(message_text(MessageKey::DefiningFailure));
    }
    text
}

fn change_text(record: &MoveRecord) -> String {
    let mut parts = Vec::new();
    if record.delta.law != 0 {
        parts.push(format!("Law: {:+}", record.delta.law));
    }
    if record.delta.chaos != 0 {
        parts.push(format!("Chaos: {:+}", record.delta.chaos));
    }
    if parts.is_empty() {
        "No Change".to_string()
    } else {
        parts.join(", ")
    }
}

fn tags_text(record: &MoveRecord) -> Option<String> {
    let mut tags = Vec::new();
    if record.difficult {
        tags.push("Difficult Challenge");
    }
    if record.defining {
        tags.push("Defining Moment");
    }
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

/// Render a record as plain text, one block per move.
pub fn render_text(record: &MoveRecord) -> String {
    let mut out = format!("{} - {}\n", record.character, record.move_name);
    if let Some(description) = &record.move_description {
        out.push_str(&format!("{description}\n"));
    }
    out.push_str(&format!(
        "Approach: {} | Difficulty: {}\n",
        kind_label(record.approach),
        record.difficulty
    ));
    if let Some(tags) = tags_text(record) {
        out.push_str(&format!("Tags: {tags}\n"));
    }
    out.push_str(&format!(
        "Tokens Drawn: {} ({} Law, {} Chaos)\n",
        record.draw,
        record.draw.count(TokenKind::Law),
        record.draw.count(TokenKind::Chaos)
    ));
    out.push_str(&format!("Outcome: {}\n", outcome_message(record)));
    out.push_str(&format!("Token Change: {}\n", change_text(record)));
    out.push_str(&format!(
        "New Totals: Law: {}, Chaos: {}",
        record.pool_after.law, record.pool_after.chaos
    ));
    if record.max_tokens_reached {
        out.push_str(&format!(" [{}]", message_text(MessageKey::MaxTokensReached)));
    }
    out.push('\n');
    if let Some(kind) = record.failure {
        out.push_str(&format!("!! {}\n", failure_text(kind)));
    }
    out
}

/// Render a record as Markdown, one section per move.
pub fn render_markdown(record: &MoveRecord) -> String {
    let mut out = format!("## {} - {}\n\n", record.character, record.move_name);
    if let Some(description) = &record.move_description {
        out.push_str(&format!("*{description}*\n\n"));
    }
    out.push_str(&format!(
        "**Approach**: {} | **Difficulty**: {}\n",
        kind_label(record.approach),
        record.difficulty
    ));
    if let Some(tags) = tags_text(record) {
        out.push_str(&format!("**Tags**: {tags}\n"));
    }
    out.push_str(&format!(
        "**Tokens Drawn**: {} ({} Law, {} Chaos)\n",
        record.draw,
        record.draw.count(TokenKind::Law),
        record.draw.count(TokenKind::Chaos)
    ));
    out.push_str(&format!("**Outcome**: {}\n", outcome_message(record)));
    out.push_str(&format!("**Token Change**: {}\n", change_text(record)));
    out.push_str(&format!(
        "**New Totals**: Law: {}, Chaos: {}",
        record.pool_after.law, record.pool_after.chaos
    ));
    if record.max_tokens_reached {
        out.push_str(&format!(" *{}*", message_text(MessageKey::MaxTokensReached)));
    }
    out.push('\n');
    if let Some(kind) = record.failure {
        out.push_str(&format!("\n**{}**\n", failure_text(kind)));
    }
    out
}

/// One-line summary for journal listings.
pub fn summary_line(record: &MoveRecord) -> String {
    format!(
        "{} - {}: {} ({}) -> Law {}, Chaos {}",
        record.character,
        record.move_name,
        record.outcome,
        record.draw,
        record.pool_after.law,
        record.pool_after.chaos
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dad_core::TokenPool;
    use dad_draw::{DEFAULT_TOKEN_CAP, MoveRequest, begin_move};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // One-sided and tiny pools make the draw deterministic no matter what
    // the RNG deals, so these fixtures never flake.
    fn success_record() -> MoveRecord {
        let mut rng = StdRng::seed_from_u64(1);
        let request = MoveRequest::new("Gary", TokenKind::Law, 3);
        begin_move(TokenPool::new(3, 0), request, DEFAULT_TOKEN_CAP, &mut rng)
            .unwrap()
            .finish(None)
    }

    fn mixed_record() -> MoveRecord {
        let mut rng = StdRng::seed_from_u64(1);
        let request = MoveRequest::new("Gary", TokenKind::Law, 2).with_difficult(true);
        begin_move(TokenPool::new(1, 1), request, DEFAULT_TOKEN_CAP, &mut rng)
            .unwrap()
            .finish(Some(TokenKind::Chaos))
    }

    #[test]
    fn every_key_has_text() {
        let keys = [
            MessageKey::OutcomeSuccess,
            MessageKey::OutcomeFailure,
            MessageKey::OutcomeMixedSuccess,
            MessageKey::OutcomeMixedFail,
            MessageKey::DefiningFailure,
            MessageKey::BecameDeadbeat,
            MessageKey::BecameHardass,
            MessageKey::CharacterFailed,
            MessageKey::MaxTokensReached,
            MessageKey::NotEnoughTokens,
        ];
        for key in keys {
            assert!(!message_text(key).is_empty());
        }
    }

    #[test]
    fn text_render_carries_the_card_sections() {
        let record = success_record();
        let text = render_text(&record);
        assert!(text.contains("Gary - Move"));
        assert!(text.contains("Approach: Law | Difficulty: 3"));
        assert!(text.contains("Tokens Drawn: law, law, law (3 Law, 0 Chaos)"));
        assert!(text.contains("Outcome: The move succeeds."));
        assert!(text.contains("Token Change: Law: +1"));
        assert!(text.contains("New Totals: Law: 4, Chaos: 0"));
        // Chaos was empty the whole time, which still reads as a hardass.
        assert!(text.contains("hardass"));
    }

    #[test]
    fn mixed_discard_shows_negative_change() {
        let record = mixed_record();
        let text = render_text(&record);
        assert!(text.contains("Tags: Difficult Challenge"));
        assert!(text.contains("Token Change: Chaos: -1"));
        assert!(text.contains("Outcome: Too difficult."));
    }

    #[test]
    fn zero_delta_renders_no_change() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = MoveRequest::new("Gary", TokenKind::Law, 2);
        let record = begin_move(
            TokenPool::new(1, 1),
            request,
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap()
        .finish(None);
        assert!(render_text(&record).contains("Token Change: No Change"));
    }

    #[test]
    fn capped_gain_is_flagged_in_totals() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = MoveRequest::new("Gary", TokenKind::Law, 1);
        let record = begin_move(
            TokenPool::new(10, 0),
            request,
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap()
        .finish(None);
        assert!(record.max_tokens_reached);
        let text = render_text(&record);
        assert!(text.contains("Maximum tokens reached"));
        assert!(text.contains("New Totals: Law: 10, Chaos: 0"));
    }

    #[test]
    fn defining_failure_text_is_appended_to_the_outcome() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = MoveRequest::new("Gary", TokenKind::Law, 1).with_defining(true);
        let record = begin_move(TokenPool::new(0, 1), request, DEFAULT_TOKEN_CAP, &mut rng)
            .unwrap()
            .finish(None);
        let text = outcome_message(&record);
        assert!(text.starts_with("The move fails."));
        assert!(text.ends_with("all drawn tokens are lost."));
    }

    #[test]
    fn markdown_render_uses_headings() {
        let record = success_record();
        let md = render_markdown(&record);
        assert!(md.starts_with("## Gary - Move"));
        assert!(md.contains("**Outcome**:"));
    }

    #[test]
    fn summary_line_is_one_line() {
        let record = success_record();
        let line = summary_line(&record);
        assert!(!line.contains('\n'));
        assert!(line.contains("Success"));
    }
}
