//! Validation Pipeline Example
//!
//! Feeds a mix of valid and invalid FIX frames through a session pipeline
//! and prints how each one is disposed of:
//! - Valid orders reach the registered handler
//! - Hand-typed pipe-delimited input is normalized to SOH form first
//! - Invalid frames become Reject (35=3) or BusinessMessageReject (35=j)
//!   responses
//! - Garbled bytes are dropped without reaching any handler

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use fixgate::prelude::*;
use fixgate_core::tags;
use tracing::info;

/// Acknowledges every order with an ExecutionReport stub.
struct OrderHandler;

#[async_trait]
impl Handler for OrderHandler {
    async fn handle(&self, message: &Message) -> Outcome {
        let cl_ord_id = message
            .field(tags::CL_ORD_ID)
            .and_then(|f| f.as_str().ok())
            .unwrap_or("?");
        let symbol = message
            .field(tags::SYMBOL)
            .and_then(|f| f.as_str().ok())
            .unwrap_or("?");
        info!(cl_ord_id, symbol, "accepted order");

        let mut builder = MessageBuilder::new("FIX.4.4");
        builder.put_str(tags::MSG_TYPE, "8");
        builder.put_str(tags::CL_ORD_ID, cl_ord_id);
        builder.put_str(tags::SYMBOL, symbol);
        Outcome::Reply(builder.finish().freeze())
    }
}

fn new_order(cl_ord_id: &str) -> Bytes {
    let mut builder = MessageBuilder::new("FIX.4.4");
    builder.put_str(tags::MSG_TYPE, "D");
    builder.put_str(tags::SENDER_COMP_ID, "CLIENT");
    builder.put_str(tags::TARGET_COMP_ID, "GATE");
    builder.put_uint(tags::MSG_SEQ_NUM, 1);
    builder.put_str(tags::CL_ORD_ID, cl_ord_id);
    builder.put_str(tags::SYMBOL, "ACME");
    builder.put_char(tags::SIDE, '1');
    builder.put_str(tags::ORDER_QTY, "100");
    builder.put_char(tags::ORD_TYPE, '2');
    builder.put_str(tags::PRICE, "10.50");
    builder.finish().freeze()
}

fn order_missing_symbol() -> Bytes {
    let mut builder = MessageBuilder::new("FIX.4.4");
    builder.put_str(tags::MSG_TYPE, "D");
    builder.put_uint(tags::MSG_SEQ_NUM, 2);
    builder.put_str(tags::CL_ORD_ID, "ord-2");
    builder.put_char(tags::SIDE, '1');
    builder.put_str(tags::ORDER_QTY, "100");
    builder.put_char(tags::ORD_TYPE, '1');
    builder.finish().freeze()
}

fn unsupported_type() -> Bytes {
    let mut builder = MessageBuilder::new("FIX.4.4");
    builder.put_str(tags::MSG_TYPE, "V");
    builder.put_uint(tags::MSG_SEQ_NUM, 3);
    builder.finish().freeze()
}

fn bad_checksum() -> Bytes {
    let mut frame = new_order("ord-4").to_vec();
    let len = frame.len();
    frame[len - 4] = b'9'; // corrupt the first checksum digit
    Bytes::from(frame)
}

/// Hand-typed input uses a printable delimiter; normalize it to wire form.
fn pipe_delimited_order() -> Bytes {
    let typed: Vec<u8> = new_order("ord-5")
        .iter()
        .map(|&b| if b == 0x01 { b'|' } else { b })
        .collect();
    let normalized = normalize_delimiters(&typed).expect("known delimiter");
    normalized.freeze()
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();

    let router = RouterBuilder::new()
        .register(MsgType::NewOrderSingle, Arc::new(OrderHandler))
        .build();
    let config = SessionConfig::new(
        CompId::new("GATE").unwrap(),
        CompId::new("CLIENT").unwrap(),
        "FIX.4.4",
    );
    let pipeline = Pipeline::new(config, router);

    let inputs: Vec<(&str, Bytes)> = vec![
        ("valid order", new_order("ord-1")),
        ("pipe-delimited order", pipe_delimited_order()),
        ("order without symbol", order_missing_symbol()),
        ("unsupported message type", unsupported_type()),
        ("corrupted checksum", bad_checksum()),
        ("garbled bytes", Bytes::from_static(b"not a fix frame")),
    ];

    for (label, frame) in inputs {
        match pipeline.process(&frame).await {
            Disposition::Handled(Outcome::Reply(reply)) => {
                info!(label, reply = %String::from_utf8_lossy(&reply), "handled with reply");
            }
            Disposition::Handled(Outcome::Done) => {
                info!(label, "handled");
            }
            Disposition::Unhandled => {
                info!(label, "no handler registered");
            }
            Disposition::Rejected(response) => {
                info!(
                    label,
                    response = %String::from_utf8_lossy(&response).replace('\x01', "|"),
                    "rejected"
                );
            }
            Disposition::Garbled(err) => {
                info!(label, error = %err, "dropped garbled frame");
            }
        }
    }
}
