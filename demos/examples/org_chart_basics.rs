// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Org chart basics.
//!
//! Load a directory payload, filter hidden roles, collapse everything, then
//! drill into a coordinator and back out.
//!
//! Run:
//! - `cargo run -p organogram_demos --example org_chart_basics`
//! - `RUST_LOG` is not read; all `debug` events are printed.

use organogram_tree::{NodeId, load::parse_forest};
use organogram_view::{OrgChart, VisibleNode};

const PAYLOAD: &str = r#"[
  {"id": 1, "name": "Marta", "role": "Diretora", "children": [
    {"id": 2, "name": "Ana", "role": "Coordenadora de Campo", "children": [
      {"id": 3, "name": "Bruno", "role": "Supervisor", "children": [
        {"id": 4, "name": "Carla", "role": "Técnica"},
        {"id": 5, "name": "Duda", "role": "Analista"}
      ]},
      {"id": 6, "name": "Edu", "role": "Supervisor", "children": [
        {"id": 7, "name": "Fabi", "role": "Técnica"}
      ]}
    ]},
    {"id": 8, "name": "Gil", "role": "Administrativo", "children": [
      {"id": 9, "name": "Hugo", "role": "Técnico"}
    ]}
  ]}
]"#;

fn print(nodes: &[VisibleNode<'_>], depth: usize) {
    for v in nodes {
        let marker = match (v.has_children, v.collapsed && v.children.is_empty()) {
            (false, _) => ' ',
            (true, true) => '+',
            (true, false) => '-',
        };
        let focus = if v.on_path { " *" } else { "" };
        println!(
            "{:indent$}{marker} {} ({}) [{}]{focus}",
            "",
            v.node.name,
            v.node.role().unwrap_or("-"),
            v.descendants,
            indent = depth * 2,
        );
        print(&v.children, depth + 1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let raw = parse_forest(PAYLOAD).expect("payload is valid");
    let mut chart = OrgChart::new(raw);

    println!("-- filtered (analysts and admins removed, reports promoted)");
    print(&chart.view(), 0);

    chart.collapse_all();
    println!("-- collapsed");
    print(&chart.view(), 0);

    chart.expand(NodeId(2));
    println!("-- drilled into Ana (supervisors auto-collapsed)");
    print(&chart.view(), 0);
    assert_eq!(chart.path(), [NodeId(1), NodeId(2)]);
    assert!(chart.is_collapsed(NodeId(3)) && chart.is_collapsed(NodeId(6)));

    chart.collapse(NodeId(2));
    println!("-- back out");
    print(&chart.view(), 0);
    assert!(chart.path().is_empty());
}
