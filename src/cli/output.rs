//! Output formatting for topology results.
//!
//! Batch results print as two tables (hosts, then connections), two CSV
//! sections, or a single JSON document. Streamed packets print one line each.

use std::io::Write;

use clap::ValueEnum;
use comfy_table::{Cell, Table};

use pcaptopo_core::{Connection, Host, StreamPacket, Topology};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON (one document for a topology, one object per line for packets)
    Json,
}

/// Formats topology results.
pub struct OutputFormatter {
    format: OutputFormat,
}

const HOST_COLUMNS: [&str; 6] = ["ip", "mac", "hostname", "packets", "first_seen_ms", "last_seen_ms"];
const CONNECTION_COLUMNS: [&str; 3] = ["src_ip", "dst_ip", "packets"];

fn host_row(host: &Host) -> [String; 6] {
    let opt = |v: Option<String>| v.unwrap_or_default();
    [
        host.ip.to_string(),
        opt(host.mac.map(|m| m.to_string())),
        opt(host.hostname.clone()),
        host.packet_count.to_string(),
        opt(host.first_seen_ms.map(|t| t.to_string())),
        opt(host.last_seen_ms.map(|t| t.to_string())),
    ]
}

fn connection_row(conn: &Connection) -> [String; 3] {
    [
        conn.src_ip.to_string(),
        conn.dst_ip.to_string(),
        conn.packet_count.to_string(),
    ]
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl OutputFormatter {
    /// Create a new formatter with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write an aggregated topology.
    pub fn write_topology<W: Write>(&self, topology: &Topology, writer: &mut W) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Table => self.write_table(topology, writer),
            OutputFormat::Csv => self.write_csv(topology, writer),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, topology)?;
                writeln!(writer)
            }
        }
    }

    /// Write one streamed packet.
    pub fn write_packet<W: Write>(&self, packet: &StreamPacket, writer: &mut W) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(writer, "{} -> {}", packet.src_ip, packet.dst_ip),
            OutputFormat::Csv => writeln!(writer, "{},{}", packet.src_ip, packet.dst_ip),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, packet)?;
                writeln!(writer)
            }
        }
    }

    fn write_table<W: Write>(&self, topology: &Topology, writer: &mut W) -> std::io::Result<()> {
        let mut hosts = Table::new();
        hosts.set_header(HOST_COLUMNS.iter().map(|c| Cell::new(c)));
        for host in &topology.hosts {
            hosts.add_row(host_row(host).iter().map(Cell::new));
        }

        let mut connections = Table::new();
        connections.set_header(CONNECTION_COLUMNS.iter().map(|c| Cell::new(c)));
        for conn in &topology.connections {
            connections.add_row(connection_row(conn).iter().map(Cell::new));
        }

        writeln!(writer, "{hosts}")?;
        writeln!(writer, "{connections}")?;

        let stats = &topology.stats;
        writeln!(
            writer,
            "{} records, {} IPv4 packets, {} hosts, {} connections{}",
            stats.records,
            stats.ipv4_packets,
            topology.hosts.len(),
            topology.connections.len(),
            if stats.truncated { " (capture truncated)" } else { "" }
        )
    }

    fn write_csv<W: Write>(&self, topology: &Topology, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", HOST_COLUMNS.join(","))?;
        for host in &topology.hosts {
            let row: Vec<String> = host_row(host).iter().map(|v| csv_field(v)).collect();
            writeln!(writer, "{}", row.join(","))?;
        }

        writeln!(writer)?;

        writeln!(writer, "{}", CONNECTION_COLUMNS.join(","))?;
        for conn in &topology.connections {
            writeln!(writer, "{}", connection_row(conn).join(","))?;
        }

        Ok(())
    }
}
