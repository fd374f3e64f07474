//! Integration tests for ipkit
//!
//! These tests exercise the public API end to end: parsing, conversion,
//! networks and ranges.

use ipkit::{
    codec::compress, parse_input, Address, AddressRange, IpError, IpRange, IpVersion, Netmask,
    Network, ParsedInput,
};

#[test]
fn test_loopback_forms() {
    let ip = Address::parse("127.0.0.1").expect("Failed to parse 127.0.0.1");

    assert_eq!(ip.to_in_addr(), &[127, 0, 0, 1]);
    assert_eq!(ip.to_binary(), "0b01111111000000000000000000000001");
    assert_eq!(ip.to_hex(), "0x7f000001");
    assert_eq!(ip.to_numeric().to_string(), "2130706433");
    assert_eq!(
        Address::from_numeric("2130706433", IpVersion::V4)
            .unwrap()
            .to_text(),
        "127.0.0.1"
    );
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        Netmask::from_prefix_length(24, IpVersion::V4)
            .unwrap()
            .to_text(),
        "255.255.255.0"
    );
    assert_eq!(
        Network::parse("192.168.1.0/24")
            .unwrap()
            .broadcast_address()
            .to_text(),
        "192.168.1.255"
    );
    assert_eq!(
        compress("2001:0DB8:AC10:FE01:0000:0000:0000:0000").unwrap(),
        "2001:db8:ac10:fe01::"
    );
}

#[test]
fn test_network_membership() {
    for cidr in ["10.0.0.0/8", "192.168.1.64/26", "2001:db8::/126", "0.0.0.0/0"] {
        let net = Network::parse(cidr).unwrap();
        assert!(net.contains(&net.network_address()), "{cidr}");
        assert!(net.contains(&net.broadcast_address()), "{cidr}");

        if let Ok(below) = net.network_address().prev(1) {
            assert!(!net.contains(&below), "{cidr} should not contain {below}");
        }
        if let Ok(above) = net.broadcast_address().next(1) {
            assert!(!net.contains(&above), "{cidr} should not contain {above}");
        }
    }
}

#[test]
fn test_span_network_contains_range() {
    let r = IpRange::parse("10.1.2.200-10.1.5.3").unwrap();
    let span = r.span_network().unwrap();
    assert_eq!(span.to_cidr(), "10.1.0.0/21");
    assert!(span.contains_range(&r));

    let tighter = Network::from_prefix_length(r.first_address(), span.prefix_length() + 1).unwrap();
    assert!(!tighter.contains_range(&r));
}

#[test]
fn test_range_iteration_matches_count() {
    let r = IpRange::parse("fe80::fffe-fe80::1:3").unwrap();
    let addrs: Vec<Address> = r.iter().collect();
    assert_eq!(addrs.len() as u128, r.count().unwrap());
    assert_eq!(addrs.first(), Some(&r.first_address()));
    assert_eq!(addrs.last(), Some(&r.last_address()));
    for pair in addrs.windows(2) {
        assert_eq!(pair[0].next(1).unwrap(), pair[1]);
    }
}

#[test]
fn test_networks_cover_range_exactly() {
    let r = IpRange::parse("192.168.0.7-192.168.3.200").unwrap();
    let nets = r.networks().unwrap();

    let total: u128 = nets.iter().map(|n| n.count().unwrap()).sum();
    assert_eq!(total, r.count().unwrap());
    assert_eq!(nets.first().unwrap().network_address(), r.first_address());
    assert_eq!(nets.last().unwrap().broadcast_address(), r.last_address());
    for pair in nets.windows(2) {
        assert_eq!(
            pair[0].broadcast_address().next(1).unwrap(),
            pair[1].network_address()
        );
    }
}

#[test]
fn test_boundaries_report_out_of_range() {
    let zero = Address::parse("0.0.0.0").unwrap();
    let top = Address::parse("255.255.255.255").unwrap();
    assert!(matches!(zero.prev(1), Err(IpError::OutOfRange(_))));
    assert!(matches!(top.next(1), Err(IpError::OutOfRange(_))));
}

#[test]
fn test_parse_input_dispatch() {
    assert!(matches!(
        parse_input("10.0.0.1").unwrap(),
        ParsedInput::Address(_)
    ));
    assert!(matches!(
        parse_input("10.0.0.0/8").unwrap(),
        ParsedInput::Network(_)
    ));
    assert!(matches!(
        parse_input("10.0.0.0 255.0.0.0").unwrap(),
        ParsedInput::Network(_)
    ));
    assert!(matches!(
        parse_input("10.0.0.*").unwrap(),
        ParsedInput::Range(_)
    ));
    assert!(matches!(
        parse_input("10.0.0.1-10.0.0.5").unwrap(),
        ParsedInput::Range(_)
    ));
    assert!(parse_input("not an address").is_err());
}

#[test]
fn test_serde_in_structs() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Allocation {
        network: Network,
        gateway: Address,
        pool: IpRange,
    }

    let alloc = Allocation {
        network: Network::parse("10.20.0.0/16").unwrap(),
        gateway: Address::parse("10.20.0.1").unwrap(),
        pool: IpRange::parse("10.20.1.0-10.20.1.99").unwrap(),
    };
    let json = serde_json::to_string(&alloc).unwrap();
    assert_eq!(
        json,
        r#"{"network":"10.20.0.0/16","gateway":"10.20.0.1","pool":"10.20.1.0-10.20.1.99"}"#
    );
    let back: Allocation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, alloc);
}
