use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use massresolve_domain::{RecordClass, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
        }
    }

    /// Classes map by wire number
    pub fn class_to_hickory(record_class: RecordClass) -> DNSClass {
        DNSClass::from(record_class.to_u16())
    }
}
