//! GENESIS Decoder Tests
//!
//! Covers the decode rules in their evaluation order: chunk count, decimals,
//! baton, initial quantity, document fields and metadata text, plus the
//! split between "no result" and rejection.

use slp_decoder::types::{BatonAndMint, Chunk, SlpTokenType, TokenAmount, TokenId};
use slp_decoder::{GenesisMessage, SlpError};

use crate::common::fixtures::genesis_txid;
use crate::common::GenesisFields;

const FUNGIBLE: u8 = 0x01;
const NFT1_CHILD: u8 = 0x41;
const NFT1_GROUP: u8 = 0x81;

fn decode(token_type: SlpTokenType, chunks: &[Chunk]) -> Result<Option<GenesisMessage>, SlpError> {
    GenesisMessage::decode(token_type, genesis_txid(), chunks)
}

fn decode_fungible(fields: GenesisFields) -> Result<Option<GenesisMessage>, SlpError> {
    decode(SlpTokenType::Fungible, &fields.into_chunks(FUNGIBLE))
}

fn decode_child(fields: GenesisFields) -> Result<Option<GenesisMessage>, SlpError> {
    decode(SlpTokenType::Nft1Child, &fields.into_chunks(NFT1_CHILD))
}

#[test]
fn test_end_to_end_fungible_genesis() {
    // Header positions are not inspected by the genesis decoder itself
    let chunks: Vec<Chunk> = vec![
        Some(b"SLP\x00".to_vec()),
        Some(vec![0x01]),
        Some(b"GENESIS".to_vec()),
        None,
        Some(b"USDH".to_vec()),
        Some(b"USD Hybrid".to_vec()),
        Some(b"https://x".to_vec()),
        Some(vec![]),
        Some(vec![9]),
        None,
        Some(vec![0x0f, 0x42, 0x40]),
    ];

    let genesis = decode(SlpTokenType::Fungible, &chunks).unwrap().unwrap();

    assert_eq!(genesis.token_type(), SlpTokenType::Fungible);
    assert_eq!(genesis.token_id(), &genesis_txid());
    assert_eq!(genesis.ticker(), "USDH");
    assert_eq!(genesis.name(), "USD Hybrid");
    assert_eq!(genesis.decimals(), 9);
    assert_eq!(genesis.baton_vout(), None);
    assert_eq!(genesis.minted_amount(), TokenAmount::from(1_000_000));
    assert_eq!(genesis.document_uri(), "https://x");
}

#[test]
fn test_chunk_count_over_eleven_fails_regardless_of_content() {
    let mut chunks = GenesisFields::default().into_chunks(FUNGIBLE);
    chunks.push(Some(b"extra".to_vec()));
    assert_eq!(
        decode(SlpTokenType::Fungible, &chunks),
        Err(SlpError::InvalidChunkCount)
    );

    let empty: Vec<Chunk> = vec![None; 12];
    assert_eq!(
        decode(SlpTokenType::Fungible, &empty),
        Err(SlpError::InvalidChunkCount)
    );
}

#[test]
fn test_decimals_range() {
    let nine = decode_fungible(GenesisFields::default()).unwrap().unwrap();
    assert_eq!(nine.decimals(), 9);

    let ten = GenesisFields {
        decimals: Some(vec![10]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(ten), Err(SlpError::InvalidDecimals));

    let empty = GenesisFields {
        decimals: Some(vec![]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(empty), Err(SlpError::InvalidDecimals));

    let two_bytes = GenesisFields {
        decimals: Some(vec![0, 8]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(two_bytes), Err(SlpError::InvalidDecimals));
}

#[test]
fn test_nft1_child_decimals_must_be_zero() {
    for decimals in 1..=9u8 {
        let fields = GenesisFields {
            decimals: Some(vec![decimals]),
            ..GenesisFields::nft1_child()
        };
        assert_eq!(decode_child(fields), Err(SlpError::InvalidDecimals));
    }

    let child = decode_child(GenesisFields::nft1_child()).unwrap().unwrap();
    assert_eq!(child.decimals(), 0);
    assert_eq!(child.baton_vout(), None);
    assert!(child.minted_amount().is_one());
}

#[test]
fn test_nft1_group_has_no_extra_restrictions() {
    let fields = GenesisFields {
        decimals: Some(vec![4]),
        baton_vout: Some(vec![2]),
        ..Default::default()
    };
    let group = decode(SlpTokenType::Nft1Group, &fields.into_chunks(NFT1_GROUP))
        .unwrap()
        .unwrap();
    assert_eq!(group.decimals(), 4);
    assert_eq!(group.baton_vout(), Some(2));
}

#[test]
fn test_fungible_baton_vout() {
    for reserved in [0u8, 1] {
        let fields = GenesisFields {
            baton_vout: Some(vec![reserved]),
            ..Default::default()
        };
        assert_eq!(decode_fungible(fields), Err(SlpError::InvalidBaton));
    }

    for vout in [2u8, 3, 19, 128, 255] {
        let fields = GenesisFields {
            baton_vout: Some(vec![vout]),
            ..Default::default()
        };
        let genesis = decode_fungible(fields).unwrap().unwrap();
        assert_eq!(genesis.baton_vout(), Some(vout));
        assert!(genesis.keeps_baton());
    }

    let multi_byte = GenesisFields {
        baton_vout: Some(vec![2, 3]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(multi_byte), Err(SlpError::InvalidBaton));
}

#[test]
fn test_empty_baton_push_destroys_baton() {
    let fields = GenesisFields {
        baton_vout: Some(vec![]),
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.baton_vout(), None);
}

#[test]
fn test_nft1_child_rejects_any_baton_byte() {
    for vout in [0u8, 1, 2, 255] {
        let fields = GenesisFields {
            baton_vout: Some(vec![vout]),
            ..GenesisFields::nft1_child()
        };
        assert_eq!(decode_child(fields), Err(SlpError::InvalidBaton));
    }
}

#[test]
fn test_nft1_child_quantity_must_be_one() {
    let two = GenesisFields {
        quantity: Some(2u64.to_be_bytes().to_vec()),
        ..GenesisFields::nft1_child()
    };
    assert_eq!(decode_child(two), Err(SlpError::InvalidNftQuantity));

    let zero = GenesisFields {
        quantity: Some(0u64.to_be_bytes().to_vec()),
        ..GenesisFields::nft1_child()
    };
    assert_eq!(decode_child(zero), Err(SlpError::InvalidNftQuantity));

    // Width does not matter, only the value
    let short_one = GenesisFields {
        quantity: Some(vec![0x01]),
        ..GenesisFields::nft1_child()
    };
    let child = decode_child(short_one).unwrap().unwrap();
    assert_eq!(child.minted_amount(), TokenAmount::one());
}

#[test]
fn test_quantity_is_unsigned() {
    let fields = GenesisFields {
        quantity: Some(vec![0xff; 8]),
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.minted_amount(), TokenAmount::from(u64::MAX));
}

#[test]
fn test_quantity_wider_than_256_bits() {
    // 2^256 is a valid fungible supply
    let mut quantity = vec![0x01];
    quantity.extend_from_slice(&[0u8; 32]);
    let fields = GenesisFields {
        quantity: Some(quantity.clone()),
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.minted_amount(), TokenAmount::from_be_slice(&quantity));
    assert_eq!(
        genesis.minted_amount().to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
    );

    let child = GenesisFields {
        quantity: Some(quantity),
        ..GenesisFields::nft1_child()
    };
    assert_eq!(decode_child(child), Err(SlpError::InvalidNftQuantity));
}

#[test]
fn test_empty_quantity_push_is_rejected() {
    let fields = GenesisFields {
        quantity: Some(vec![]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Err(SlpError::InvalidQuantity));
}

#[test]
fn test_document_hash_lengths() {
    let five = GenesisFields {
        document_hash: Some(vec![0x11; 5]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(five), Err(SlpError::InvalidDocumentHash));

    let empty = decode_fungible(GenesisFields::default()).unwrap().unwrap();
    assert_eq!(empty.document_hash(), "");

    let hash = GenesisFields {
        document_hash: Some(vec![b'a'; 32]),
        ..Default::default()
    };
    let genesis = decode_fungible(hash).unwrap().unwrap();
    assert_eq!(genesis.document_hash(), "a".repeat(32));

    let absent = GenesisFields {
        document_hash: None,
        ..Default::default()
    };
    assert_eq!(decode_fungible(absent).unwrap().unwrap().document_hash(), "");
}

#[test]
fn test_document_hash_nul_bytes_become_zero_digits() {
    let mut hash = vec![b'f'; 32];
    hash[0] = 0;
    hash[31] = 0;
    let fields = GenesisFields {
        document_hash: Some(hash),
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.document_hash(), format!("0{}0", "f".repeat(30)));
}

#[test]
fn test_absent_text_fields_are_empty() {
    let fields = GenesisFields {
        ticker: None,
        name: None,
        document_uri: None,
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.ticker(), "");
    assert_eq!(genesis.name(), "");
    assert_eq!(genesis.document_uri(), "");
}

#[test]
fn test_nul_replacement_differs_by_field() {
    let fields = GenesisFields {
        ticker: Some(b"US\0DH".to_vec()),
        name: Some(b"USD\0Hybrid".to_vec()),
        document_uri: Some(b"https://x/\0".to_vec()),
        ..Default::default()
    };
    let genesis = decode_fungible(fields).unwrap().unwrap();
    assert_eq!(genesis.ticker(), "US DH");
    assert_eq!(genesis.name(), "USD Hybrid");
    assert_eq!(genesis.document_uri(), "https://x/0");
}

#[test]
fn test_missing_decimals_is_no_result() {
    let fields = GenesisFields {
        decimals: None,
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Ok(None));
}

#[test]
fn test_missing_quantity_is_no_result() {
    let fields = GenesisFields {
        quantity: None,
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Ok(None));

    // Also when the list simply ends before the quantity position
    let mut chunks = GenesisFields::default().into_chunks(FUNGIBLE);
    chunks.truncate(10);
    assert_eq!(decode(SlpTokenType::Fungible, &chunks), Ok(None));

    // Missing quantity for an NFT1 child is still "no result", not a quantity error
    let child = GenesisFields {
        quantity: None,
        ..GenesisFields::nft1_child()
    };
    assert_eq!(decode_child(child), Ok(None));
}

#[test]
fn test_first_failure_wins() {
    // Decimals are checked before the baton and the document hash
    let fields = GenesisFields {
        decimals: Some(vec![42]),
        baton_vout: Some(vec![1]),
        document_hash: Some(vec![0; 5]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Err(SlpError::InvalidDecimals));

    // Baton is checked before the quantity
    let fields = GenesisFields {
        baton_vout: Some(vec![7]),
        quantity: Some(2u64.to_be_bytes().to_vec()),
        ..GenesisFields::nft1_child()
    };
    assert_eq!(decode_child(fields), Err(SlpError::InvalidBaton));

    // Missing decimals short-circuits before a bad baton is seen
    let fields = GenesisFields {
        decimals: None,
        baton_vout: Some(vec![0]),
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Ok(None));

    // A bad baton is reported even when the quantity is missing
    let fields = GenesisFields {
        baton_vout: Some(vec![1]),
        quantity: None,
        ..Default::default()
    };
    assert_eq!(decode_fungible(fields), Err(SlpError::InvalidBaton));
}

#[test]
fn test_token_details_projection() {
    let genesis = decode_fungible(GenesisFields::default()).unwrap().unwrap();
    let details = genesis.token_details();

    assert_eq!(details.token_id, genesis_txid());
    assert_eq!(details.ticker, "USDH");
    assert_eq!(details.name, "USD Hybrid");
    assert_eq!(details.decimals, 9);
    assert_eq!(details.document_uri, "https://x");
    assert!(std::ptr::eq(details, genesis.token_details()));
}

#[test]
fn test_genesis_uses_supplied_token_id() {
    let token_id = TokenId::new([0x5a; 32]);
    let chunks = GenesisFields::default().into_chunks(FUNGIBLE);
    let genesis = GenesisMessage::decode(SlpTokenType::Fungible, token_id, &chunks)
        .unwrap()
        .unwrap();
    assert_eq!(genesis.token_id(), &token_id);
}
