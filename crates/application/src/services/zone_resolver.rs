use chrono::{DateTime, Utc};
use reverse_dns_domain::{
    CaaData, DnsQuery, DnsRecord, EncodedAddress, RecordData, RecordType, SoaData, SoaSerial,
    ZoneConfig,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Builds answers from the queried name and the static zone configuration.
///
/// Resolution order, first match wins:
/// 1. an address encoded below the apex (direct or `reverse`), answered with
///    an `A` record regardless of the query type
/// 2. the apex itself, dispatched on the query type
/// 3. anything else, answered with no records
///
/// Holds no mutable state and can be shared freely between tasks.
pub struct ZoneResolver {
    apex: Arc<str>,
    ttl: u32,
    ipv4: Ipv4Addr,
    ipv6: Ipv6Addr,
    nameservers: Vec<Arc<str>>,
    soa_mname: Arc<str>,
    soa_rname: Arc<str>,
    soa_refresh: u32,
    soa_retry: u32,
    soa_expire: u32,
    soa_minimum: u32,
    caa: CaaData,
}

impl ZoneResolver {
    pub fn new(zone: &ZoneConfig) -> Self {
        let mut zone = zone.clone();
        zone.normalize();

        Self {
            apex: zone.apex.into(),
            ttl: zone.ttl,
            ipv4: zone.ipv4,
            ipv6: zone.ipv6,
            nameservers: zone.nameservers.into_iter().map(Arc::from).collect(),
            soa_mname: zone.soa.mname.into(),
            soa_rname: zone.soa.rname.into(),
            soa_refresh: zone.soa.refresh,
            soa_retry: zone.soa.retry,
            soa_expire: zone.soa.expire,
            soa_minimum: zone.soa.minimum,
            caa: CaaData {
                flags: zone.caa.flags,
                tag: zone.caa.tag.into(),
                value: zone.caa.value.into(),
            },
        }
    }

    pub fn apex(&self) -> &str {
        &self.apex
    }

    pub fn resolve(&self, query: &DnsQuery, now: DateTime<Utc>) -> Vec<DnsRecord> {
        let domain = query.domain.as_ref();

        if let Some(encoded) = EncodedAddress::parse(domain, &self.apex) {
            let address = encoded.address();
            debug!(
                domain = %domain,
                encoding = encoded.encoding.as_str(),
                prefix = encoded.prefix.unwrap_or(""),
                address = %address,
                "Encoded address matched"
            );
            return vec![self.record(&query.domain, RecordData::A(address))];
        }

        if domain == self.apex.as_ref() {
            debug!(domain = %domain, record_type = %query.record_type, "Apex query");
            return self.resolve_apex(&query.domain, query.record_type, now);
        }

        debug!(domain = %domain, "No match found");
        Vec::new()
    }

    fn resolve_apex(
        &self,
        domain: &Arc<str>,
        record_type: RecordType,
        now: DateTime<Utc>,
    ) -> Vec<DnsRecord> {
        match record_type {
            RecordType::A => vec![self.record(domain, RecordData::A(self.ipv4))],
            RecordType::AAAA => vec![self.record(domain, RecordData::AAAA(self.ipv6))],
            RecordType::SOA => vec![self.record(domain, RecordData::SOA(self.soa(now)))],
            RecordType::NS => self
                .nameservers
                .iter()
                .map(|ns| self.record(domain, RecordData::NS(ns.clone())))
                .collect(),
            RecordType::CAA => vec![self.record(domain, RecordData::CAA(self.caa.clone()))],
            other => {
                debug!(domain = %domain, record_type = %other, "Unhandled query type");
                Vec::new()
            }
        }
    }

    fn soa(&self, now: DateTime<Utc>) -> SoaData {
        SoaData {
            mname: self.soa_mname.clone(),
            rname: self.soa_rname.clone(),
            serial: SoaSerial::from_datetime(&now),
            refresh: self.soa_refresh,
            retry: self.soa_retry,
            expire: self.soa_expire,
            minimum: self.soa_minimum,
        }
    }

    fn record(&self, domain: &Arc<str>, data: RecordData) -> DnsRecord {
        DnsRecord::new(domain.clone(), self.ttl, data)
    }
}
