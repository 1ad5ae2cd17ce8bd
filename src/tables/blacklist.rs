//! Parties locales réservées aux rôles (RFC 2142 et usages courants).

use phf::phf_set;

pub(super) static BLACKLIST: phf::Set<&'static str> = phf_set! {
    "abuse", "admin", "administrator", "billing", "compliance",
    "devnull", "dns", "ftp", "hostmaster", "info",
    "inoc", "ispfeedback", "ispsupport", "list", "list-request",
    "maildaemon", "mailer-daemon", "marketing", "news", "no-reply",
    "noc", "noreply", "null", "phish", "phishing",
    "postmaster", "privacy", "registrar", "root", "sales",
    "security", "spam", "support", "sysadmin", "tech",
    "undisclosed-recipients", "unsubscribe", "usenet", "uucp", "webmaster",
    "www",
};
