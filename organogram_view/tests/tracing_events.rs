// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing integration tests for chart commands.
//!
//!   cargo test -p organogram_view --features tracing --test tracing_events

#![cfg(feature = "tracing")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use organogram_tree::{Node, NodeId};
use organogram_view::OrgChart;
use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    message: String,
    fields: HashMap<String, String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        self.events
            .lock()
            .unwrap()
            .push(CapturedEvent { message, fields });
    }
}

fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = events.lock().unwrap().clone();
    out
}

fn raw() -> Vec<Node> {
    vec![
        Node::new(1, "CEO").child(
            Node::new(2, "Ana")
                .with_role("Coordenador")
                .child(Node::new(3, "Bruno").with_role("Supervisor")),
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn refresh_emits_summary() {
    let events = with_captured_events(|| {
        let _chart = OrgChart::new(raw());
    });
    let refresh = events
        .iter()
        .find(|e| e.message == "refreshed org chart")
        .expect("refresh event");
    assert_eq!(refresh.fields.get("nodes").map(String::as_str), Some("3"));
    assert!(!events.iter().any(|e| e.message == "drill path cut by refresh"));

    // Filter and count passes in the tree crate log at trace level too.
    assert!(events.iter().any(|e| e.message == "filtered forest"));
    assert!(events.iter().any(|e| e.message == "built descendant index"));
}

#[test]
fn commands_emit_events_in_order() {
    let events = with_captured_events(|| {
        let mut chart = OrgChart::new(raw());
        chart.collapse_all();
        chart.expand(NodeId(2));
        chart.collapse(NodeId(2));
        chart.expand(NodeId(99));
        chart.expand_all();
        chart.clear_focus();
    });
    let messages: Vec<&str> = events
        .iter()
        .map(|e| e.message.as_str())
        .filter(|m| !matches!(*m, "filtered forest" | "built descendant index" | "refreshed org chart"))
        .collect();
    assert_eq!(
        messages,
        [
            "collapse all",
            "expand",
            "collapse",
            "drill path backed out",
            "expand",
            "expand all",
            "clear focus",
        ]
    );

    let miss = events
        .iter()
        .filter(|e| e.message == "expand")
        .nth(1)
        .expect("second expand");
    assert_eq!(miss.fields.get("found").map(String::as_str), Some("false"));
    assert_eq!(miss.fields.get("id").map(String::as_str), Some("99"));
}

#[test]
fn refresh_reports_cut_path() {
    let events = with_captured_events(|| {
        let mut chart = OrgChart::new(raw());
        chart.expand(NodeId(3));
        chart.refresh(vec![Node::new(1, "CEO")]);
        assert_eq!(chart.path(), [NodeId(1)]);
    });
    let cut = events
        .iter()
        .find(|e| e.message == "drill path cut by refresh")
        .expect("cut event");
    assert_eq!(cut.fields.get("depth").map(String::as_str), Some("1"));
}
