use massresolve_domain::RecordType;
use std::borrow::Cow;
use std::net::IpAddr;

pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa", nibbles.join("."))
        }
    }
}

/// Name to put on the wire: PTR lookups accept bare IP addresses.
pub fn query_name_for(name: &str, record_type: RecordType) -> Cow<'_, str> {
    if record_type == RecordType::PTR {
        if let Ok(ip) = name.parse::<IpAddr>() {
            return Cow::Owned(ip_to_reverse_domain(&ip));
        }
    }
    Cow::Borrowed(name)
}
