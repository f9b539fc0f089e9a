/// ネットワーク関連ユーティリティ
/// ポート分類、IPv4 文字列・バイト列の判定と変換、ドメイン名判定、MACアドレス取得

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::process::Command;

use crate::bitkit_common_rs::core::exceptions::{UtilError, UtilResult};

static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$",
    )
    .unwrap()
});
static DOMAIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)+[a-zA-Z]{2,}$").unwrap());
// windows は 00-00-00-00-00-00、linux/macos は 00:00:00:00:00:00、一部機器は 0000.0000.0000
static MAC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(([0-9A-F]{2}[-:]){5}[0-9A-F]{2})|(([0-9A-F]{4}\.){2}[0-9A-F]{4})").unwrap()
});

const ZERO_MAC: &str = "00:00:00:00:00:00";

/// 有効なポート番号か (0-65535)
pub fn is_net_port(port: i64) -> bool {
    (0..=65535).contains(&port)
}

/// ウェルノウンポートか (0-1023)
pub fn is_well_known_port(port: i64) -> bool {
    is_net_port(port) && port <= 1023
}

/// 登録済みポートか (1024-49151)
pub fn is_registered_port(port: i64) -> bool {
    is_net_port(port) && (1024..=49151).contains(&port)
}

/// 動的・プライベートポートか (49152-65535)
pub fn is_dynamic_port(port: i64) -> bool {
    is_net_port(port) && port >= 49152
}

/// IPv4 アドレス文字列か（例: 192.168.1.1）
pub fn is_ipv4_str(ip: &str) -> bool {
    !ip.is_empty() && IPV4_PATTERN.is_match(ip)
}

/// IPv4 アドレスのバイト表現か（4バイト）
pub fn is_ipv4_bytes(bytes: &[u8]) -> bool {
    bytes.len() == 4
}

pub fn is_domain(domain: &str) -> bool {
    !domain.is_empty() && DOMAIN_PATTERN.is_match(domain)
}

/// 4バイトを "a.b.c.d" 形式に変換する
pub fn bytes_to_ipv4_str(value: &[u8]) -> Option<String> {
    if !is_ipv4_bytes(value) {
        return None;
    }
    Some(
        value
            .iter()
            .map(|octet| octet.to_string())
            .collect::<Vec<_>>()
            .join("."),
    )
}

/// "a.b.c.d" 形式を4バイトに変換する（IPv4 のみ）
pub fn ipv4_str_to_bytes(value: &str) -> Option<[u8; 4]> {
    if !is_ipv4_str(value) {
        return None;
    }

    let mut bytes = [0u8; 4];
    for (slot, part) in bytes.iter_mut().zip(value.split('.')) {
        *slot = part.parse().ok()?;
    }
    Some(bytes)
}

/// コマンド出力から MAC アドレスを抽出する
///
/// 小文字化・'-' を ':' に置換・全ゼロを除外・重複除去・ソートして返す。
pub fn parse_mac_addrs(output: &str) -> Vec<String> {
    let mut addrs: Vec<String> = MAC_PATTERN
        .find_iter(output)
        .map(|m| m.as_str().to_lowercase().replace('-', ":"))
        .filter(|addr| addr != ZERO_MAC)
        .collect();
    addrs.sort();
    addrs.dedup();
    addrs
}

/// OSごとの MAC アドレス一覧取得コマンド
fn mac_command(os: &str) -> UtilResult<(&'static str, &'static [&'static str])> {
    match os {
        "windows" => Ok(("ipconfig", &["/all"])),
        "linux" | "macos" => Ok(("ifconfig", &["-a"])),
        other => Err(UtilError::UnsupportedPlatform(other.to_string())),
    }
}

/// このマシンの MAC アドレス一覧を取得する
///
/// コマンドが失敗した場合やアドレスが見つからない場合は Ok(None)。
pub async fn get_mac_addr() -> UtilResult<Option<Vec<String>>> {
    let (program, args) = mac_command(std::env::consts::OS)?;
    debug!("MACアドレス取得コマンドを実行: {} {}", program, args.join(" "));

    let output = Command::new(program).args(args).output().await?;
    if !output.status.success() {
        debug!("{} が終了コード {:?} で終了しました", program, output.status.code());
        return Ok(None);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let addrs = parse_mac_addrs(&stdout);
    debug!("MACアドレスを {} 件検出", addrs.len());

    if addrs.is_empty() {
        return Ok(None);
    }
    Ok(Some(addrs))
}
