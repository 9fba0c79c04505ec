#[path = "../common/mod.rs"]
mod common;

use ccnet::protocol::codec::{ack_frame, encode_command_frame, nak_frame};
use ccnet::protocol::commands::{encode_enable_bill_types, encode_set_security};
use ccnet::protocol::Command;
use ccnet::{Denomination, NominalMask};

use common::fixtures::*;

#[test]
fn bare_commands_match_wire_captures() {
    let cases: [(Command, &[u8]); 7] = [
        (Command::Poll, &POLL),
        (Command::Reset, &RESET),
        (Command::GetStatus, &GET_STATUS),
        (Command::Identification, &IDENTIFICATION),
        (Command::Stack, &STACK),
        (Command::Return, &RETURN),
        (Command::Hold, &HOLD),
    ];
    for (cmd, wire) in cases {
        assert_eq!(encode_command_frame(cmd, &[]).unwrap(), wire, "{}", cmd);
    }
    assert_eq!(ack_frame(), ACK);
    assert_eq!(nak_frame(), NAK);
}

#[test]
fn enable_bill_types_frames() {
    let all = encode_enable_bill_types(NominalMask::all(), NominalMask::none());
    assert_eq!(
        encode_command_frame(Command::EnableBillTypes, &all).unwrap(),
        ENABLE_ALL
    );

    let none = encode_enable_bill_types(NominalMask::none(), NominalMask::none());
    assert_eq!(
        encode_command_frame(Command::EnableBillTypes, &none).unwrap(),
        DISABLE
    );
}

#[test]
fn set_security_frame() {
    let payload = encode_set_security(NominalMask::none());
    assert_eq!(
        encode_command_frame(Command::SetSecurity, &payload).unwrap(),
        SET_SECURITY_NONE
    );
}

#[test]
fn mask_built_from_denominations() {
    let mask = NominalMask::from_denominations(&[Denomination::D100, Denomination::D500]);
    let payload = encode_enable_bill_types(mask, mask);
    assert_eq!(payload[2], mask.to_byte());
    assert_eq!(payload[5], mask.to_byte());
    assert_eq!(payload[0] | payload[1] | payload[3] | payload[4], 0);
}
