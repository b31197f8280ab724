use ct_verify::sth::{decode_signature, encode_sth_input};
use ct_verify::SthRecord;
use serde::Deserialize;

#[derive(Deserialize)]
struct Root {
    signature_container: Vec<ContainerFixture>,
    sth_input: Vec<InputFixture>,
}

#[derive(Deserialize)]
struct ContainerFixture {
    name: String,
    wire_hex: String,
    expect_ok: bool,
    inner_hex: Option<String>,
}

#[derive(Deserialize)]
struct InputFixture {
    name: String,
    timestamp: u64,
    tree_size: u64,
    root_hash_hex: String,
    expect_ok: bool,
    input_hex: Option<String>,
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    hex::decode(s.trim()).expect("hex")
}

fn load() -> Root {
    let data = std::fs::read_to_string("vectors/sth_wire.json").expect("vectors");
    serde_json::from_str(&data).expect("json")
}

#[test]
fn signature_container_vectors() {
    for f in load().signature_container {
        let wire = hex_to_bytes(&f.wire_hex);
        let got = decode_signature(&wire);
        assert_eq!(got.is_ok(), f.expect_ok, "container fixture {}", f.name);
        if let Some(inner_hex) = f.inner_hex {
            assert_eq!(
                got.expect("inner"),
                hex_to_bytes(&inner_hex),
                "container fixture {}",
                f.name
            );
        }
    }
}

#[test]
fn sth_input_vectors() {
    for f in load().sth_input {
        let sth = SthRecord {
            timestamp: f.timestamp,
            tree_size: f.tree_size,
            root_hash: hex_to_bytes(&f.root_hash_hex),
            signature: Vec::new(),
        };
        let got = encode_sth_input(&sth);
        assert_eq!(got.is_ok(), f.expect_ok, "input fixture {}", f.name);
        if let Some(input_hex) = f.input_hex {
            assert_eq!(
                got.expect("input"),
                hex_to_bytes(&input_hex),
                "input fixture {}",
                f.name
            );
        }
    }
}
