use rsoverride::meta::{FALLBACK, FRONT_PROXY, GLOBAL, LANDING, LOW_COST, SELECT};
use rsoverride::{
    synthesize, ConfigRenderer, GroupKind, InputLoader, OutputFormat, ProxyNode, RawArgs,
    SynthesisInput,
};

const NODES: &str = r#"
proxies:
  - { name: "🇭🇰 香港 01", type: ss, server: a.example.com, port: 1 }
  - { name: "🇭🇰 香港 02", type: ss, server: b.example.com, port: 2 }
  - { name: "🇯🇵 日本 01", type: ss, server: c.example.com, port: 3 }
  - { name: "🇺🇸 美国 0.3x", type: ss, server: d.example.com, port: 4 }
  - { name: "🇹🇼 台湾 01", type: ss, server: e.example.com, port: 5 }
  - { name: "🇸🇬 新加坡 家宽", type: ss, server: f.example.com, port: 6 }
"#;

fn load(query: &str) -> SynthesisInput {
    let mut input = InputLoader::from_str(NODES).unwrap();
    input.flags.extend_query(query);
    input
}

#[test]
fn every_reference_resolves() {
    let config = synthesize(&load("landing=true&loadbalance=url-test"));
    let names = config.group_names();

    for group in &config.proxy_groups {
        for member in group.member_list() {
            let builtin = matches!(member.as_str(), "DIRECT" | "REJECT" | "REJECT-DROP");
            assert!(builtin || names.contains(&member.as_str()), "{} -> {} 未定义", group.name, member);
        }
    }

    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len(), "策略组名称重复");
}

#[test]
fn landing_mode_layout() {
    let config = synthesize(&load("landing=true"));

    let front = config.group(FRONT_PROXY).unwrap();
    assert!(!front.member_list().iter().any(|m| m == LANDING || m == FALLBACK));

    let landing = config.group(LANDING).unwrap();
    assert!(landing.include_all);
    assert!(landing.filter.as_deref().unwrap().starts_with("(?i)"));

    // 落地节点（新加坡 家宽）不计入地区
    assert!(config.group("新加坡节点").is_none());
    assert_eq!(config.group(SELECT).unwrap().member_list()[1], LANDING);

    let hk = config.group("香港节点").unwrap();
    assert!(hk.exclude_filter.as_deref().unwrap().contains("家宽"));
}

#[test]
fn threshold_and_region_overrides() {
    let config = synthesize(&load("threshold=2"));
    let names = config.group_names();
    assert!(names.contains(&"香港节点"));
    assert!(!names.contains(&"台湾节点"));
    assert!(!names.contains(&"日本节点"));

    // 台湾未达标时巴哈姆特退回默认列表
    let bahamut = config.group("Bahamut").unwrap();
    assert_eq!(bahamut.member_list()[0], SELECT);

    let config = synthesize(&load(""));
    let bahamut = config.group("Bahamut").unwrap();
    assert_eq!(bahamut.member_list()[0], "台湾节点");
    let bilibili = config.group("Bilibili").unwrap();
    assert_eq!(bilibili.member_list(), ["直连", "台湾节点", "香港节点"]);
    let truth = config.group("Truth Social").unwrap();
    assert_eq!(truth.member_list()[0], "美国节点");
}

#[test]
fn low_cost_group_and_global_tail() {
    let config = synthesize(&load("loadbalance=load-balance"));
    assert_eq!(config.group(LOW_COST).unwrap().kind, GroupKind::UrlTest);
    assert_eq!(config.group("香港节点").unwrap().kind, GroupKind::LoadBalance);

    let last = config.proxy_groups.last().unwrap();
    assert_eq!(last.name, GLOBAL);
    assert!(last.include_all);
}

#[test]
fn yaml_round_trip_preserves_nodes() {
    let input = load("full=true&fakeip=true");
    let config = synthesize(&input);
    let yaml = ConfigRenderer::render(&config, OutputFormat::Yaml).unwrap();

    let reloaded = InputLoader::from_str(&yaml).unwrap();
    assert_eq!(reloaded.proxies, input.proxies);

    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["dns"]["enhanced-mode"].as_str(), Some("fake-ip"));
    assert_eq!(value["mixed-port"].as_u64(), Some(7890));
    assert!(value["rule-providers"].as_mapping().is_some());
}

#[test]
fn rendering_is_deterministic() {
    let input = SynthesisInput::new(
        RawArgs::from_pairs([("landing", "true"), ("quic", "1")]),
        vec![ProxyNode::named("HK 01"), ProxyNode::named("US 01")],
    );
    let a = ConfigRenderer::render(&synthesize(&input), OutputFormat::Json).unwrap();
    let b = ConfigRenderer::render(&synthesize(&input), OutputFormat::Json).unwrap();
    assert_eq!(a, b);
}
