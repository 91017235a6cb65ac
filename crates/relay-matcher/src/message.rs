//! Description and failure message rendering.

use relay_core::{format_arguments, InvocationRecord, SubjectKind};

use crate::MatcherSpec;

/// `delegate #deliver_mail to #mailman object[, allowing ...][ passing arguments ...][ as ...]`
pub(crate) fn describe(spec: &MatcherSpec, kind: SubjectKind) -> String {
    let delegating = spec.delegating_method();
    let accessor = spec.accessor.as_deref().unwrap_or_default();
    let mut description = format!(
        "delegate {} to {} object",
        kind.qualify(&delegating),
        kind.qualify(accessor)
    );

    if spec.allow_nil {
        description.push_str(&format!(
            ", allowing {} to return nil",
            kind.qualify(accessor)
        ));
    }

    if !spec.arguments.is_empty() {
        description.push_str(" passing arguments ");
        description.push_str(&format_arguments(&spec.arguments));
    }

    let delegate_method = spec.delegate_method();
    if delegate_method != delegating {
        description.push_str(" as ");
        description.push_str(&kind.qualify(delegate_method));
    }

    description
}

/// `Method calls sent to PostOffice#mailman: (none)` or the numbered list.
pub(crate) fn calls_paragraph(
    subject: &str,
    kind: SubjectKind,
    accessor: &str,
    calls: &[InvocationRecord],
    limit: usize,
) -> String {
    let mut paragraph = format!(
        "Method calls sent to {subject}{}:",
        kind.qualify(accessor)
    );

    if calls.is_empty() {
        paragraph.push_str(" (none)");
        return paragraph;
    }

    paragraph.push('\n');
    for (index, call) in calls.iter().take(limit).enumerate() {
        paragraph.push_str(&format!("\n{}) {call}", index + 1));
    }
    if calls.len() > limit {
        paragraph.push_str(&format!("\n... and {} more", calls.len() - limit));
    }
    paragraph
}

pub(crate) fn nil_paragraph(
    kind: SubjectKind,
    accessor: &str,
    method: &str,
    error: &str,
) -> String {
    format!(
        "When {} returned nothing, calling {} failed: {error}",
        kind.qualify(accessor),
        kind.qualify(method)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::delegate_method;

    #[test]
    fn empty_call_list_reads_none() {
        let paragraph = calls_paragraph("PostOffice", SubjectKind::Instance, "mailman", &[], 20);
        assert_eq!(paragraph, "Method calls sent to PostOffice#mailman: (none)");
    }

    #[test]
    fn calls_are_numbered_and_truncated() {
        let calls = vec![
            InvocationRecord::new("deliver_mail", &[json!(1)]),
            InvocationRecord::new("deliver_mail", &[json!(2)]),
            InvocationRecord::new("ring_bell", &[]),
        ];
        let paragraph = calls_paragraph("PostOffice", SubjectKind::Class, "mailman", &calls, 2);
        assert_eq!(
            paragraph,
            "Method calls sent to PostOffice.mailman:\n\n1) deliver_mail(1)\n2) deliver_mail(2)\n... and 1 more"
        );
    }

    #[test]
    fn qualifiers_follow_a_fixed_order() {
        let matcher = delegate_method("deliver_mail")
            .to("mailman")
            .as_method("hand_over")
            .with_arguments([json!("221B")])
            .allow_nil();
        assert_eq!(
            describe(matcher.spec(), SubjectKind::Instance),
            "delegate #deliver_mail to #mailman object, allowing #mailman to return nil \
             passing arguments [\"221B\"] as #hand_over"
        );
    }

    #[test]
    fn alias_equal_to_method_is_not_repeated() {
        let matcher = delegate_method("deliver_mail")
            .to("mailman")
            .as_method("deliver_mail");
        assert_eq!(
            describe(matcher.spec(), SubjectKind::Instance),
            "delegate #deliver_mail to #mailman object"
        );
    }
}
