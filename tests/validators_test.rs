//! Tests for the pure node-request validators

use rstest::rstest;

use orgtree::domain::{
    can_add_under_parent, validate_node_request, DomainError, NodeRequest, NodeType,
};

fn request(node_type: &str, name: &str, number: &str, address: Option<&str>) -> NodeRequest {
    NodeRequest {
        node_type: node_type.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        address: address.map(|a| a.to_string()),
    }
}

#[test]
fn given_valid_store_request_when_validating_then_returns_store_type() {
    let req = request("STORE", "Test Store", "123", Some("123 Test St"));

    let result = validate_node_request(&req);

    assert_eq!(result, Ok(NodeType::Store));
}

#[test]
fn given_valid_region_request_without_address_when_validating_then_passes() {
    let req = request("REGION", "Test Region", "456", None);

    let result = validate_node_request(&req);

    assert_eq!(result, Ok(NodeType::Region));
}

#[test]
fn given_unknown_type_when_validating_then_error_names_the_valid_set() {
    let req = request("INVALID_TYPE", "Test Node", "123", None);

    let err = validate_node_request(&req).unwrap_err();

    assert_eq!(err, DomainError::InvalidNodeType("INVALID_TYPE".to_string()));
    assert!(err.to_string().contains("invalid node type"));
    assert!(err.to_string().contains("ROOT, FRANCHISE, REGION, STORE"));
}

#[test]
fn given_unknown_type_and_empty_name_when_validating_then_type_check_wins() {
    // First failing check is reported, not an aggregate
    let req = request("SHOP", "", "", None);

    let err = validate_node_request(&req).unwrap_err();

    assert_eq!(err, DomainError::InvalidNodeType("SHOP".to_string()));
}

#[rstest]
#[case("")]
#[case("   ")]
fn given_blank_name_when_validating_then_name_is_required(#[case] name: &str) {
    let req = request("REGION", name, "123", None);

    assert_eq!(validate_node_request(&req), Err(DomainError::NameRequired));
}

#[test]
fn given_name_longer_than_100_chars_when_validating_then_rejected() {
    let req = request("REGION", &"a".repeat(101), "123", None);

    assert_eq!(validate_node_request(&req), Err(DomainError::NameTooLong));
}

#[test]
fn given_name_of_exactly_100_chars_when_validating_then_passes() {
    let req = request("REGION", &"a".repeat(100), "123", None);

    assert!(validate_node_request(&req).is_ok());
}

#[rstest]
#[case("")]
#[case("  ")]
fn given_blank_number_when_validating_then_number_is_required(#[case] number: &str) {
    let req = request("REGION", "Test Region", number, None);

    assert_eq!(validate_node_request(&req), Err(DomainError::NumberRequired));
}

#[rstest]
#[case("12")]
#[case("1234")]
#[case("0a2")]
#[case("-12")]
#[case("1 2")]
#[case(" 12")]
fn given_number_not_three_digits_when_validating_then_rejected(#[case] number: &str) {
    let req = request("REGION", "Test Region", number, None);

    let err = validate_node_request(&req).unwrap_err();

    assert_eq!(err, DomainError::NumberFormat);
    assert!(err.to_string().contains("exactly 3 digits"));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn given_store_without_address_when_validating_then_rejected(#[case] address: Option<&str>) {
    let req = request("STORE", "Test Store", "123", address);

    assert_eq!(
        validate_node_request(&req),
        Err(DomainError::AddressRequired)
    );
}

#[test]
fn given_store_with_address_longer_than_200_chars_when_validating_then_rejected() {
    let long_address = "a".repeat(201);
    let req = request("STORE", "Test Store", "123", Some(&long_address));

    assert_eq!(validate_node_request(&req), Err(DomainError::AddressTooLong));
}

#[test]
fn given_non_store_with_long_address_when_validating_then_address_is_ignored() {
    let long_address = "a".repeat(201);
    let req = request("REGION", "Test Region", "123", Some(&long_address));

    assert!(validate_node_request(&req).is_ok());
}

#[rstest]
#[case(NodeType::Root, NodeType::Franchise, true)]
#[case(NodeType::Franchise, NodeType::Region, true)]
#[case(NodeType::Region, NodeType::Store, true)]
#[case(NodeType::Root, NodeType::Store, false)]
#[case(NodeType::Root, NodeType::Region, false)]
#[case(NodeType::Root, NodeType::Root, false)]
#[case(NodeType::Franchise, NodeType::Store, false)]
#[case(NodeType::Franchise, NodeType::Franchise, false)]
#[case(NodeType::Region, NodeType::Franchise, false)]
#[case(NodeType::Region, NodeType::Region, false)]
fn given_type_pair_when_checking_legality_then_matches_table(
    #[case] parent: NodeType,
    #[case] child: NodeType,
    #[case] expected: bool,
) {
    assert_eq!(can_add_under_parent(parent, child), expected);
}

#[test]
fn given_store_parent_when_checking_any_child_then_always_illegal() {
    // STORE is the terminal state of the descent chain
    for child in NodeType::ALL {
        assert!(!can_add_under_parent(NodeType::Store, child));
    }
}
