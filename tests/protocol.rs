use redping::*;

#[test]
fn ping_payload_bytes() {
    assert_eq!(inline_command("PING"), b"+PING\r\n");
}

#[test]
fn payload_is_deterministic() {
    assert_eq!(inline_command("PING"), inline_command("PING"));
}
