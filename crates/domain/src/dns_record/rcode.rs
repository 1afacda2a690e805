//! DNS response codes (RFC 1035 §4.1.1, RFC 6891 extended range).

pub const NO_ERROR: u16 = 0;
pub const FORM_ERR: u16 = 1;
pub const SERV_FAIL: u16 = 2;
pub const NX_DOMAIN: u16 = 3;
pub const NOT_IMP: u16 = 4;
pub const REFUSED: u16 = 5;

pub fn is_success(rcode: u16) -> bool {
    rcode == NO_ERROR
}

/// Mnemonic used in logs.
pub fn rcode_name(rcode: u16) -> &'static str {
    match rcode {
        NO_ERROR => "NOERROR",
        FORM_ERR => "FORMERR",
        SERV_FAIL => "SERVFAIL",
        NX_DOMAIN => "NXDOMAIN",
        NOT_IMP => "NOTIMP",
        REFUSED => "REFUSED",
        _ => "UNKNOWN",
    }
}
