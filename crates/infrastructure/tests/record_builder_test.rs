use chrono::{TimeZone, Utc};
use hickory_proto::rr::{Name, RData, RecordType as HickoryRecordType};
use reverse_dns_domain::{CaaData, DnsRecord, RecordData, SoaData, SoaSerial};
use reverse_dns_infrastructure::dns::RecordBuilder;
use std::net::Ipv4Addr;
use std::str::FromStr;

#[test]
fn test_build_a_record() {
    let record = DnsRecord::new(
        "10.0.0.1.polisystems.cloud",
        604_800,
        RecordData::A(Ipv4Addr::new(10, 0, 0, 1)),
    );

    let wire = RecordBuilder::build(&record).unwrap();

    assert_eq!(wire.record_type(), HickoryRecordType::A);
    assert_eq!(wire.ttl(), 604_800);
    assert_eq!(
        wire.name(),
        &Name::from_str("10.0.0.1.polisystems.cloud.").unwrap()
    );
    match wire.data() {
        Some(RData::A(a)) => assert_eq!(a.0, Ipv4Addr::new(10, 0, 0, 1)),
        other => panic!("expected A, got {:?}", other),
    }
}

#[test]
fn test_build_ns_record() {
    let record = DnsRecord::new(
        "polisystems.cloud",
        300,
        RecordData::NS("ns1.polisystems.cloud".into()),
    );

    let wire = RecordBuilder::build(&record).unwrap();

    match wire.data() {
        Some(RData::NS(ns)) => {
            assert_eq!(ns.0, Name::from_str("ns1.polisystems.cloud.").unwrap())
        }
        other => panic!("expected NS, got {:?}", other),
    }
}

#[test]
fn test_build_soa_record_uses_wire_serial() {
    let serial = SoaSerial::from_datetime(&Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    let record = DnsRecord::new(
        "polisystems.cloud",
        604_800,
        RecordData::SOA(SoaData {
            mname: "ns1.polisystems.cloud".into(),
            rname: "hostmaster.polisystems.cloud".into(),
            serial,
            refresh: 3600,
            retry: 1800,
            expire: 1_209_600,
            minimum: 86_400,
        }),
    );

    let wire = RecordBuilder::build(&record).unwrap();

    match wire.data() {
        Some(RData::SOA(soa)) => {
            assert_eq!(soa.serial(), serial.wire_value());
            assert_eq!(soa.refresh(), 3600);
            assert_eq!(soa.retry(), 1800);
            assert_eq!(soa.expire(), 1_209_600);
            assert_eq!(soa.minimum(), 86_400);
            assert_eq!(
                soa.rname(),
                &Name::from_str("hostmaster.polisystems.cloud.").unwrap()
            );
        }
        other => panic!("expected SOA, got {:?}", other),
    }
}

#[test]
fn test_build_caa_record_as_raw_rdata() {
    let record = DnsRecord::new(
        "polisystems.cloud",
        604_800,
        RecordData::CAA(CaaData {
            flags: 0,
            tag: "issue".into(),
            value: "letsencrypt.org".into(),
        }),
    );

    let wire = RecordBuilder::build(&record).unwrap();

    assert_eq!(wire.record_type(), HickoryRecordType::CAA);
}

#[test]
fn test_caa_rdata_layout() {
    let caa = CaaData {
        flags: 128,
        tag: "issue".into(),
        value: "ca.example".into(),
    };

    let rdata = RecordBuilder::caa_rdata(&caa).unwrap();

    let mut expected = vec![128u8, 5];
    expected.extend_from_slice(b"issue");
    expected.extend_from_slice(b"ca.example");
    assert_eq!(rdata, expected);
}

#[test]
fn test_caa_rdata_rejects_empty_tag() {
    let caa = CaaData {
        flags: 0,
        tag: "".into(),
        value: "letsencrypt.org".into(),
    };
    assert!(RecordBuilder::caa_rdata(&caa).is_err());
}

#[test]
fn test_parse_name_rejects_oversized_label() {
    let label = "a".repeat(64);
    assert!(RecordBuilder::parse_name(&format!("{}.polisystems.cloud", label)).is_err());
}
