use colored::*;
use emaildefense_domain::{
    DkimPresenceResult, LookupOutcome, MxResult, Report, TlsaCheck, TxtPolicyResult,
};

fn ok(message: impl AsRef<str>) -> String {
    format!("{} {}", "[+]".green().bold(), message.as_ref())
}

fn absent(message: impl AsRef<str>) -> String {
    format!("{} {}", "[!]".yellow().bold(), message.as_ref())
}

fn failed(message: impl AsRef<str>) -> String {
    format!("{} {}", "[x]".red().bold(), message.as_ref())
}

fn detail(message: impl AsRef<str>) -> String {
    format!("    {}", message.as_ref())
}

/// Line-oriented report. `full` adds every raw record and TLSA tuple.
pub fn render_report(report: &Report, full: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} via {}",
        "Email defense report for".bold(),
        report.domain.bold(),
        report.nameserver
    )];

    render_mx(&mut lines, &report.domain, &report.mx, full);
    render_policy(&mut lines, "SPF", &report.spf, full);
    render_policy(&mut lines, "DMARC", &report.dmarc, full);
    render_dkim(&mut lines, &report.dkim);

    if report.tlsa_skipped {
        lines.push(absent("TLSA lookups skipped, no MX hosts"));
    }
    for check in &report.tlsa {
        render_tlsa(&mut lines, check, full);
    }

    lines
}

pub fn print_report(report: &Report, full: bool) {
    for line in render_report(report, full) {
        println!("{line}");
    }
}

fn render_mx(lines: &mut Vec<String>, domain: &str, outcome: &LookupOutcome<MxResult>, full: bool) {
    let result = match (&outcome.result, &outcome.error) {
        (_, Some(error)) => {
            lines.push(failed(error.to_string()));
            return;
        }
        (Some(result), None) => result,
        (None, None) => return,
    };

    if result.is_empty() {
        lines.push(absent(format!("No MX records found for {domain}")));
        return;
    }

    if result.is_null_mx() {
        lines.push(absent(format!(
            "Null MX published for {domain}, domain accepts no mail (authenticated_data: {})",
            result.authenticated_data
        )));
        return;
    }

    lines.push(ok(format!(
        "{} MX record(s) for {domain} (authenticated_data: {})",
        result.entries.len(),
        result.authenticated_data
    )));
    for entry in &result.entries {
        if full {
            lines.push(detail(format!("{} preference {}", entry.host, entry.preference)));
        } else {
            lines.push(detail(&entry.host));
        }
    }
}

fn render_policy(
    lines: &mut Vec<String>,
    label: &str,
    outcome: &LookupOutcome<TxtPolicyResult>,
    full: bool,
) {
    let result = match (&outcome.result, &outcome.error) {
        (_, Some(error)) => {
            lines.push(failed(error.to_string()));
            return;
        }
        (Some(result), None) => result,
        (None, None) => return,
    };

    if result.is_empty() {
        lines.push(absent(format!(
            "No {label} record found at {} (authenticated_data: {})",
            result.domain, result.authenticated_data
        )));
        return;
    }

    lines.push(ok(format!(
        "{label} record found at {} (authenticated_data: {})",
        result.domain, result.authenticated_data
    )));
    if full {
        lines.extend(result.records.iter().map(detail));
    }
}

fn render_dkim(lines: &mut Vec<String>, outcome: &LookupOutcome<DkimPresenceResult>) {
    let result = match (&outcome.result, &outcome.error) {
        (_, Some(error)) => {
            lines.push(failed(error.to_string()));
            return;
        }
        (Some(result), None) => result,
        (None, None) => return,
    };

    let message = format!(
        "{} answered {} (authenticated_data: {})",
        result.domain, result.status, result.authenticated_data
    );
    if result.status.is_present() {
        lines.push(ok(message));
    } else {
        lines.push(absent(message));
    }
}

fn render_tlsa(lines: &mut Vec<String>, check: &TlsaCheck, full: bool) {
    let result = match (&check.outcome.result, &check.outcome.error) {
        (_, Some(error)) => {
            lines.push(failed(format!("{}: {error}", check.host)));
            return;
        }
        (Some(result), None) => result,
        (None, None) => return,
    };

    if result.is_empty() {
        lines.push(absent(format!("No TLSA records at {}", result.domain)));
        return;
    }

    lines.push(ok(format!(
        "{} TLSA record(s) at {} (authenticated_data: {})",
        result.entries.len(),
        result.domain,
        result.authenticated_data
    )));
    if full {
        for entry in &result.entries {
            lines.push(detail(format!(
                "{} {} {} {} ({} {} {})",
                entry.usage,
                entry.selector,
                entry.matching_type,
                entry.data_hex(),
                entry.usage_name(),
                entry.selector_name(),
                entry.matching_name()
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::mixed_report;
    use emaildefense_domain::{DomainError, LookupKind, MxEntry};

    fn plain(report: &Report, full: bool) -> Vec<String> {
        colored::control::set_override(false);
        render_report(report, full)
    }

    #[test]
    fn test_markers_follow_outcomes() {
        let lines = plain(&mixed_report(), false);

        assert!(lines
            .iter()
            .any(|l| l == "[+] 2 MX record(s) for example.org (authenticated_data: true)"));
        assert!(lines.iter().any(|l| l.starts_with("[+] SPF record found")));
        assert!(lines
            .iter()
            .any(|l| l == "[x] dmarc record lookup not successful (rcode 2)"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("[!] _domainkey.example.org answered NameError")));
        assert!(lines
            .iter()
            .any(|l| l == "[!] No TLSA records at _25._tcp.mx2.example.org"));
    }

    #[test]
    fn test_full_adds_raw_records() {
        let short = plain(&mixed_report(), false);
        let full = plain(&mixed_report(), true);

        assert!(!short.iter().any(|l| l.contains("v=spf1 mx -all")));
        assert!(full.iter().any(|l| l == "    v=spf1 mx -all"));
        assert!(full.iter().any(|l| l == "    mx1.example.org preference 10"));
        assert!(full
            .iter()
            .any(|l| l == "    3 1 1 dead (DANE-EE SPKI SHA2-256)"));
    }

    #[test]
    fn test_null_mx_is_an_absence() {
        let mut report = mixed_report();
        report.mx = LookupOutcome::ok(MxResult {
            authenticated_data: false,
            entries: vec![MxEntry::new(".", 0)],
        });
        report.tlsa.clear();
        report.tlsa_skipped = true;

        let lines = plain(&report, false);
        assert!(lines.iter().any(|l| l
            == "[!] Null MX published for example.org, domain accepts no mail (authenticated_data: false)"));
        assert!(!lines.iter().any(|l| l.starts_with("[+]") && l.contains("MX")));
    }

    #[test]
    fn test_skipped_tlsa_is_a_warning() {
        let mut report = mixed_report();
        report.mx = LookupOutcome::failed(DomainError::LookupFailed {
            lookup: LookupKind::Mx,
            rcode: 5,
        });
        report.tlsa.clear();
        report.tlsa_skipped = true;

        let lines = plain(&report, false);
        assert!(lines
            .iter()
            .any(|l| l == "[x] mx record lookup not successful (rcode 5)"));
        assert!(lines
            .iter()
            .any(|l| l == "[!] TLSA lookups skipped, no MX hosts"));
    }
}
