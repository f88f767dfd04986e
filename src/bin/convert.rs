//! gvson 转换工具
//!
//! 把 GraphViz DOT 文件转换为 GraphSON NDJSON 文件，
//! 输出写到同目录下扩展名为 json 的文件

use clap::Parser;
use gvson::{apply_override_entries, dot, export, ConvertConfig, Converter, EdgeDirection};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gvson")]
#[command(about = "GraphViz DOT 到 GraphSON 转换工具", version)]
struct Args {
    /// 输入的 DOT 文件路径
    #[arg(short = 'f', long)]
    filename: PathBuf,

    /// 默认节点标签
    #[arg(short = 'n', long, default_value = "node")]
    node_label: String,

    /// 默认边标签
    #[arg(short = 'e', long, default_value = "edge")]
    edge_label: String,

    /// 边颜色到标签映射，形如 #cc9900=parent（可重复）
    #[arg(short = 'c', long = "edge-color")]
    edge_color: Vec<String>,

    /// 边粗细到标签映射，形如 2=parent（可重复）
    #[arg(short = 't', long = "edge-thickness")]
    edge_thickness: Vec<String>,

    /// 边线型到标签映射，形如 dotted=parent（可重复）
    #[arg(short = 's', long = "edge-style")]
    edge_style: Vec<String>,

    /// 节点形状到标签映射，形如 rect=person（可重复）
    #[arg(short = 'p', long = "node-shape")]
    node_shape: Vec<String>,

    /// 反转边端点方向，把端点对的第二个元素视为起点
    #[arg(long)]
    reverse_endpoints: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = ConvertConfig::default();
    config.default_node_label = args.node_label;
    config.default_edge_label = args.edge_label;
    if args.reverse_endpoints {
        config.edge_direction = EdgeDirection::SecondToFirst;
    }
    apply_override_entries(&mut config.edge_color_overrides, &args.edge_color)?;
    apply_override_entries(&mut config.edge_thickness_overrides, &args.edge_thickness)?;
    apply_override_entries(&mut config.edge_style_overrides, &args.edge_style)?;
    apply_override_entries(&mut config.node_shape_overrides, &args.node_shape)?;

    println!("gvson 图格式转换工具");
    println!("====================");
    println!("输入文件: {}", args.filename.display());

    let graph = dot::load_file(&args.filename)?;

    println!(
        "解析完成: {} 个节点记录, {} 条边记录",
        graph.node_count(),
        graph.edge_count()
    );
    println!("\n开始转换...");

    let converter = Converter::new(&config);
    let (nodes, stats) = converter.convert(&graph)?;

    let output = export::output_path(&args.filename);
    export::write_jsonl(&output, &nodes)?;

    println!("\n转换完成!");
    println!("  节点转换: {}", stats.nodes_converted);
    println!("  边转换: {}", stats.edges_converted);
    println!("  名称回退: {}", stats.defaulted_names);
    println!("  耗时: {} ms", stats.duration_ms);
    println!("  输出文件: {}", output.display());

    Ok(())
}
