use super::*;

#[test]
fn test_command_is_bare_at() {
    let cmd = Command::Test;
    assert_eq!(cmd.encode().unwrap().as_str(), "AT");
    assert_eq!(cmd.ack(), "OK");
}

#[test]
fn baud_commands_cover_all_nine_rates() {
    let rates = [
        (BaudRate::B1200, "AT+BAUD1", "OK1200", 1200),
        (BaudRate::B2400, "AT+BAUD2", "OK2400", 2400),
        (BaudRate::B4800, "AT+BAUD3", "OK4800", 4800),
        (BaudRate::B9600, "AT+BAUD4", "OK9600", 9600),
        (BaudRate::B19200, "AT+BAUD5", "OK19200", 19200),
        (BaudRate::B38400, "AT+BAUD6", "OK38400", 38400),
        (BaudRate::B57600, "AT+BAUD7", "OK57600", 57600),
        (BaudRate::B115200, "AT+BAUD8", "OK115200", 115200),
        (BaudRate::B230400, "AT+BAUD9", "OK230400", 230400),
    ];
    for (rate, cmd, ack, bps) in rates {
        assert_eq!(Command::SetBaud(rate).encode().unwrap().as_str(), cmd);
        assert_eq!(Command::SetBaud(rate).ack(), ack);
        assert_eq!(rate.bps(), bps);
        assert_eq!(BaudRate::try_from(bps), Ok(rate));
    }
}

#[test]
fn factory_default_rate() {
    assert_eq!(BaudRate::default(), BaudRate::B9600);
}

#[test]
fn unsupported_baud_is_rejected() {
    assert_eq!(BaudRate::try_from(31250), Err(UnsupportedBaud(31250)));
    assert_eq!(BaudRate::try_from(0), Err(UnsupportedBaud(0)));
}

#[test]
fn set_name_encodes_prefix_and_name() {
    let cmd = Command::SetName("robot-arm");
    assert_eq!(cmd.encode().unwrap().as_str(), "AT+NAMErobot-arm");
    assert_eq!(cmd.ack(), "OKsetname");
}

#[test]
fn set_name_accepts_boundary_lengths() {
    // empty name is accepted, matching the module
    assert_eq!(Command::SetName("").encode().unwrap().as_str(), "AT+NAME");
    let longest = "abcdefghijklm";
    assert_eq!(longest.len(), NAME_MAX_LEN);
    assert_eq!(
        Command::SetName(longest).encode().unwrap().as_str(),
        "AT+NAMEabcdefghijklm"
    );
}

#[test]
fn set_name_rejects_overlong_name() {
    let too_long = "abcdefghijklmn";
    assert_eq!(
        Command::SetName(too_long).encode(),
        Err(EncodeError::NameTooLong)
    );
}

#[test]
fn set_pin_encodes_four_digits() {
    let cmd = Command::SetPin("1234");
    assert_eq!(cmd.encode().unwrap().as_str(), "AT+PIN1234");
    assert_eq!(cmd.ack(), "OKsetPIN");
}

#[test]
fn set_pin_rejects_bad_lengths_and_non_digits() {
    assert_eq!(Command::SetPin("123").encode(), Err(EncodeError::InvalidPin));
    assert_eq!(
        Command::SetPin("12345").encode(),
        Err(EncodeError::InvalidPin)
    );
    assert_eq!(
        Command::SetPin("12a4").encode(),
        Err(EncodeError::InvalidPin)
    );
    assert_eq!(Command::SetPin("").encode(), Err(EncodeError::InvalidPin));
}
