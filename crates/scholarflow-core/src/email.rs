//! Email previews
//!
//! Composed for display only; nothing is ever sent.

use crate::config::WorkflowConfig;
use crate::manuscript::Manuscript;
use crate::people::Reviewer;
use crate::screening::{rejection_detail, SCOPE_GATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Pre-screening result sent to the corresponding author of a rejected
/// submission. `None` if no gate failed.
pub fn author_rejection_email(manuscript: &Manuscript) -> Option<EmailDraft> {
    let detail = rejection_detail(manuscript)?;
    let author = manuscript.corresponding_author();

    let mut body = format!(
        "Dear {author},\n\n\
         Thank you for submitting your manuscript titled \"{title}\" to {journal}.\n\n\
         After careful pre-screening, we regret to inform you that your submission \
         cannot proceed to peer review due to the following reason:\n\n\
         {reason}\n{details}\n\n",
        title = manuscript.title,
        journal = manuscript.journal,
        reason = detail.reason,
        details = detail.details,
    );

    if detail.reason == SCOPE_GATE {
        body.push_str(
            "We believe your research would be better suited for journals focusing on \
             social media studies or general media communication. Please consider \
             submitting to the recommended journals listed in your submission portal.\n\n",
        );
    }

    body.push_str(&format!(
        "If you have questions about this decision, please contact the editorial office.\n\n\
         Best regards,\nEditorial Office\n{}",
        manuscript.journal
    ));

    Some(EmailDraft {
        to: author.to_string(),
        subject: format!("Submission {} - Pre-Screening Results", manuscript.id),
        body,
    })
}

/// Invitation to review `manuscript`
pub fn reviewer_invitation(
    reviewer: &Reviewer,
    manuscript: &Manuscript,
    workflow: &WorkflowConfig,
) -> EmailDraft {
    let body = format!(
        "Dear {name},\n\n\
         We would like to invite you to review the following manuscript submitted to \
         {journal}:\n\n\
         {title}\n\
         Abstract: {abstract_text}\n\n\
         Review Timeline:\n\
         - Response to invitation: {respond} days\n\
         - Review completion: {complete} days from acceptance\n\n\
         Please respond to this invitation by clicking the link below. If you are unable \
         to complete this review, we would appreciate suggestions for alternative reviewers.\n\n\
         Thank you for your contribution to the peer review process.\n\n\
         Best regards,\nEditorial Office\n{journal}",
        name = reviewer.name,
        journal = manuscript.journal,
        title = manuscript.title,
        abstract_text = manuscript.abstract_text,
        respond = workflow.reviewer_response_days,
        complete = workflow.review_completion_days,
    );

    EmailDraft {
        to: reviewer.email.clone(),
        subject: format!("Invitation to Review: {}", manuscript.id),
        body,
    }
}
