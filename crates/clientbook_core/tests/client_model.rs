use clientbook_core::Client;

#[test]
fn client_new_starts_unpersisted() {
    let client = Client::new("Sidorova Olga", "olga", "19930517", "olga@example.org");

    assert_eq!(client.id, 0);
    assert!(!client.is_persisted());
    assert_eq!(client.fio, "Sidorova Olga");
    assert_eq!(client.login, "olga");
    assert_eq!(client.birthday, "19930517");
    assert_eq!(client.email, "olga@example.org");
}

#[test]
fn default_client_is_the_zero_valued_record() {
    let client = Client::default();

    assert_eq!(client.id, 0);
    assert!(client.fio.is_empty());
    assert!(client.login.is_empty());
    assert!(client.birthday.is_empty());
    assert!(client.email.is_empty());
}

#[test]
fn client_serialization_uses_expected_wire_fields() {
    let mut client = Client::new("Test", "Test", "19700101", "mail@mail.com");
    client.id = 42;

    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["fio"], "Test");
    assert_eq!(json["login"], "Test");
    assert_eq!(json["birthday"], "19700101");
    assert_eq!(json["email"], "mail@mail.com");

    let decoded: Client = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, client);
}
