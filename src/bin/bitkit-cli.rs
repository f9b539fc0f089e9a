use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

use bitkit_rust::bitkit_common_rs::bytes::bit_array::{BitArray, BitOrder};
use bitkit_rust::bitkit_common_rs::bytes::bytes_util;
use bitkit_rust::bitkit_common_rs::encoding::encode_util;
use bitkit_rust::bitkit_common_rs::net::net_util;
use bitkit_rust::bitkit_common_rs::utils::config_loader::{BitkitConfig, ConfigLoader, OutputFormat};
use bitkit_rust::bitkit_common_rs::utils::log_config::{init_logger, LogLevel};

#[derive(Parser)]
#[command(name = "bitkit")]
#[command(about = "bitkit - ビット配列・バイト列ユーティリティ CLI")]
#[command(version = "0.1.0")]
#[command(long_about = "
bitkit ビット配列・バイト列ユーティリティ

このツールは以下の機能を提供します：
- from-int / from-bin / from-hex: ビット配列の生成と表示
- get / set:  ビット単位の読み書き (lowest / highest)
- xor / diff / cmp: ビット配列同士の演算と比較
- chunk:      バイト列の分割
- validate:   base64 / hex / base32 / SHA1 / IPv4 / ドメインの書式判定
- port / mac: ネットワーク関連の補助

設定は bitkit.toml / bitkit.json と BITKIT_ 接頭辞の環境変数から読み込みます。
")]
struct Cli {
    /// 設定ファイル
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 出力形式 (binary, hex, int)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// ビットインデックスの数え方 (lowest, highest)
    #[arg(short, long, global = true)]
    order: Option<BitOrder>,

    /// デバッグモード
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 整数からビット配列を生成
    FromInt {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// 最小ビット長
        #[arg(short, long)]
        min_bits: Option<usize>,
    },
    /// 2進数文字列からビット配列を生成
    FromBin { value: String },
    /// 16進数文字列からビット配列を生成
    FromHex { value: String },
    /// ビットを取得
    Get { bits: String, index: usize },
    /// ビットを設定して結果を表示
    Set {
        bits: String,
        index: usize,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// 同じ長さのビット配列の XOR
    Xor { left: String, right: String },
    /// 異なるビットのインデックス (lowest 基準)
    Diff { left: String, right: String },
    /// 数値として比較
    Cmp { left: String, right: String },
    /// 16進数で与えたバイト列を分割
    Chunk { hex: String, length: usize },
    /// 書式判定
    Validate { kind: ValidateKind, value: String },
    /// ポート番号の分類
    Port { port: i64 },
    /// MAC アドレス一覧
    Mac,
    /// 有効な設定を表示
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValidateKind {
    Base64,
    Hex,
    Base32,
    Sha1Hex,
    Sha1Base32,
    Ipv4,
    Domain,
}

fn validate(kind: ValidateKind, value: &str) -> bool {
    match kind {
        ValidateKind::Base64 => encode_util::is_base64_str(value),
        ValidateKind::Hex => encode_util::is_hex_str(value),
        ValidateKind::Base32 => encode_util::is_base32_str(value),
        ValidateKind::Sha1Hex => encode_util::is_sha1_hex_str(value),
        ValidateKind::Sha1Base32 => encode_util::is_sha1_base32_str(value),
        ValidateKind::Ipv4 => net_util::is_ipv4_str(value),
        ValidateKind::Domain => net_util::is_domain(value),
    }
}

fn port_class(port: i64) -> &'static str {
    if net_util::is_well_known_port(port) {
        "well-known"
    } else if net_util::is_registered_port(port) {
        "registered"
    } else if net_util::is_dynamic_port(port) {
        "dynamic"
    } else {
        "invalid"
    }
}

fn load_config(cli: &Cli) -> Result<BitkitConfig, Box<dyn Error>> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_paths(vec![path.clone()]),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(order) = cli.order {
        config.output.bit_order = order;
    }
    Ok(config)
}

async fn run(cli: Cli, config: BitkitConfig) -> Result<(), Box<dyn Error>> {
    let format = config.output.format;
    let order = config.output.bit_order;

    match cli.command {
        Commands::FromInt { value, min_bits } => {
            let bits = BitArray::from_int(value, min_bits.unwrap_or(config.output.min_bits))?;
            println!("{}", format.render(&bits));
        }
        Commands::FromBin { value } => {
            let bits: BitArray = value.parse()?;
            println!("{}", format.render(&bits));
        }
        Commands::FromHex { value } => {
            let bits = BitArray::from_bytes(&bytes_util::hex_str_to_bytes(&value)?);
            println!("{}", format.render(&bits));
        }
        Commands::Get { bits, index } => {
            let bits: BitArray = bits.parse()?;
            println!("{}", bits.get(index, order)?);
        }
        Commands::Set { bits, index, value } => {
            let mut bits: BitArray = bits.parse()?;
            bits.set(index, value, order)?;
            println!("{}", format.render(&bits));
        }
        Commands::Xor { left, right } => {
            let left: BitArray = left.parse()?;
            let right: BitArray = right.parse()?;
            println!("{}", format.render(&left.xor(&right)?));
        }
        Commands::Diff { left, right } => {
            let left: BitArray = left.parse()?;
            let right: BitArray = right.parse()?;
            let indices: Vec<String> = left.diff(&right)?.iter().map(|i| i.to_string()).collect();
            println!("[{}]", indices.join(", "));
        }
        Commands::Cmp { left, right } => {
            let left: BitArray = left.parse()?;
            let right: BitArray = right.parse()?;
            let symbol = match left.cmp(&right) {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "==",
                std::cmp::Ordering::Greater => ">",
            };
            println!("{} {} {}", left.to_int_string(), symbol, right.to_int_string());
        }
        Commands::Chunk { hex, length } => {
            let data = bytes_util::hex_str_to_bytes(&hex)?;
            for chunk in bytes_util::chunk_bytes(&data, length)? {
                println!("{}", bytes_util::bytes_to_hex_str(&chunk));
            }
        }
        Commands::Validate { kind, value } => {
            println!("{}", validate(kind, &value));
        }
        Commands::Port { port } => {
            println!("{}", port_class(port));
        }
        Commands::Mac => match net_util::get_mac_addr().await? {
            Some(addrs) => addrs.iter().for_each(|addr| println!("{}", addr)),
            None => println!("MACアドレスが見つかりません"),
        },
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let level = if cli.debug { LogLevel::Debug } else { config.log_level()? };
    init_logger(level)?;

    run(cli, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_class() {
        assert_eq!(port_class(22), "well-known");
        assert_eq!(port_class(8080), "registered");
        assert_eq!(port_class(50000), "dynamic");
        assert_eq!(port_class(70000), "invalid");
    }

    #[test]
    fn test_cli_parses_global_options() {
        let cli = Cli::parse_from(["bitkit", "get", "10101010", "1", "--order", "highest"]);
        assert_eq!(cli.order, Some(BitOrder::Highest));
        assert!(matches!(cli.command, Commands::Get { index: 1, .. }));
    }

    #[test]
    fn test_validate_kinds() {
        assert!(validate(ValidateKind::Ipv4, "10.0.0.1"));
        assert!(!validate(ValidateKind::Hex, "xyz"));
    }
}
