use hickory_proto::rr::rdata::{A, AAAA, NS, NULL, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use reverse_dns_domain::{CaaData, DnsRecord, DomainError, RecordData, SoaData};

/// Converts synthesized domain records into hickory wire records.
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn build(record: &DnsRecord) -> Result<Record, DomainError> {
        let name = Self::parse_name(&record.domain)?;

        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::NS(ns) => RData::NS(NS(Self::parse_name(ns)?)),
            RecordData::SOA(soa) => RData::SOA(Self::soa(soa)?),
            RecordData::CAA(caa) => RData::Unknown {
                code: HickoryRecordType::CAA,
                rdata: NULL::with(Self::caa_rdata(caa)?),
            },
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    /// Parses a normalized name as fully qualified.
    pub fn parse_name(name: &str) -> Result<Name, DomainError> {
        Name::from_ascii(format!("{}.", name.trim_end_matches('.')))
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
    }

    fn soa(soa: &SoaData) -> Result<SOA, DomainError> {
        Ok(SOA::new(
            Self::parse_name(&soa.mname)?,
            Self::parse_name(&soa.rname)?,
            soa.serial.wire_value(),
            Self::signed_interval("refresh", soa.refresh)?,
            Self::signed_interval("retry", soa.retry)?,
            Self::signed_interval("expire", soa.expire)?,
            soa.minimum,
        ))
    }

    fn signed_interval(field: &str, value: u32) -> Result<i32, DomainError> {
        i32::try_from(value).map_err(|_| {
            DomainError::InvalidRecordData(format!("SOA {} {} exceeds {}", field, value, i32::MAX))
        })
    }

    /// RFC 8659 RDATA: flags octet, tag length, tag, then the value as raw bytes.
    pub fn caa_rdata(caa: &CaaData) -> Result<Vec<u8>, DomainError> {
        let tag = caa.tag.as_bytes();
        let tag_len = u8::try_from(tag.len())
            .ok()
            .filter(|len| *len > 0)
            .ok_or_else(|| {
                DomainError::InvalidRecordData(format!("CAA tag '{}' has invalid length", caa.tag))
            })?;

        let mut rdata = Vec::with_capacity(2 + tag.len() + caa.value.len());
        rdata.push(caa.flags);
        rdata.push(tag_len);
        rdata.extend_from_slice(tag);
        rdata.extend_from_slice(caa.value.as_bytes());
        Ok(rdata)
    }
}
