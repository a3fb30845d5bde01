//! Declarative resource block rendering.
//!
//! Responsibilities:
//! - One render function per resource kind, mapping a fetched entity onto a
//!   `typesense_*` resource block.
//! - Collect the external variables that sensitive values are deferred to;
//!   secrets never appear literally in rendered text.
//!
//! Non-responsibilities:
//! - Identifier derivation (see `names`), import lines (see `imports`),
//!   orchestration (see the module root).

use typesense_client::cloud::models::Cluster;
use typesense_client::models::{
    AnalyticsRule, ApiKey, Collection, CollectionAlias, CollectionField, Override, Preset,
    StopwordsSet, Synonym, SynonymSet,
};

use crate::generator::hcl::{Block, jsonencode};

/// An externally supplied variable referenced by rendered resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Variable {
    pub name: String,
    pub description: String,
    pub sensitive: bool,
}

/// Render the fixed file header: terraform requirements, provider wiring,
/// and the connection variables the provider block references.
pub(crate) fn render_header(generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Generated by typesense-cli generate at {}\n# Review before applying; computed values (document counts, timestamps)\n# are intentionally omitted.\n\n",
        generated_at
    ));
    out.push_str(
        "terraform {\n  required_providers {\n    typesense = {\n      source = \"typesense/typesense\"\n    }\n  }\n}\n\n",
    );
    out.push_str(
        "provider \"typesense\" {\n  api_key = var.typesense_api_key\n  host    = var.typesense_host\n}\n\n",
    );
    out.push_str(&render_variable(&Variable {
        name: "typesense_api_key".to_string(),
        description: "Admin API key of the managed cluster".to_string(),
        sensitive: true,
    }));
    out.push('\n');
    out.push_str(&render_variable(&Variable {
        name: "typesense_host".to_string(),
        description: "Host of the managed cluster".to_string(),
        sensitive: false,
    }));
    out
}

/// Render a `variable` block.
pub(crate) fn render_variable(variable: &Variable) -> String {
    let mut block = Block::variable(&variable.name);
    block.attr_raw("type", "string");
    block.attr_str("description", &variable.description);
    if variable.sensitive {
        block.attr_bool("sensitive", true);
    }
    block.render()
}

fn field_block(field: &CollectionField, address: &str, variables: &mut Vec<Variable>) -> Block {
    let mut block = Block::nested("fields");
    block.attr_str("name", &field.name);
    if let Some(field_type) = &field.field_type {
        block.attr_str("type", field_type);
    }
    if let Some(facet) = field.facet {
        block.attr_bool("facet", facet);
    }
    if let Some(optional) = field.optional {
        block.attr_bool("optional", optional);
    }
    if let Some(index) = field.index {
        block.attr_bool("index", index);
    }
    if let Some(sort) = field.sort {
        block.attr_bool("sort", sort);
    }
    if let Some(infix) = field.infix {
        block.attr_bool("infix", infix);
    }
    if let Some(stem) = field.stem {
        block.attr_bool("stem", stem);
    }
    if let Some(locale) = &field.locale {
        block.attr_str("locale", locale);
    }
    if let Some(num_dim) = field.num_dim {
        block.attr_int("num_dim", i64::from(num_dim));
    }
    if let Some(vec_dist) = &field.vec_dist {
        block.attr_str("vec_dist", vec_dist);
    }
    if let Some(hnsw) = &field.hnsw_params {
        let mut hnsw_block = Block::nested("hnsw_params");
        if let Some(m) = hnsw.m {
            hnsw_block.attr_int("m", i64::from(m));
        }
        if let Some(ef) = hnsw.ef_construction {
            hnsw_block.attr_int("ef_construction", i64::from(ef));
        }
        block.block(hnsw_block);
    }
    if let Some(embed) = &field.embed {
        let mut embed_block = Block::nested("embed");
        embed_block.attr_str_list("from", &embed.from);
        let mut model_block = Block::nested("model_config");
        model_block.attr_str("model_name", &embed.model_config.model_name);
        if embed.model_config.api_key.is_some() {
            let var_name = format!("{}_embedding_api_key", address);
            model_block.comment("embedding provider key is not exported; supply it externally");
            model_block.attr_raw("api_key", format!("var.{}", var_name));
            variables.push(Variable {
                name: var_name,
                description: format!(
                    "Embedding provider API key for collection field '{}'",
                    field.name
                ),
                sensitive: true,
            });
        }
        if let Some(url) = &embed.model_config.url {
            model_block.attr_str("url", url);
        }
        embed_block.block(model_block);
        block.block(embed_block);
    }
    block
}

/// Render a `typesense_collection` resource.
pub(crate) fn render_collection(
    address: &str,
    collection: &Collection,
    variables: &mut Vec<Variable>,
) -> String {
    let mut block = Block::resource("typesense_collection", address);
    block.attr_str("name", &collection.name);
    if let Some(sorting) = &collection.default_sorting_field {
        block.attr_str("default_sorting_field", sorting);
    }
    if let Some(separators) = &collection.token_separators {
        block.attr_str_list("token_separators", separators);
    }
    if let Some(symbols) = &collection.symbols_to_index {
        block.attr_str_list("symbols_to_index", symbols);
    }
    if let Some(nested) = collection.enable_nested_fields {
        block.attr_bool("enable_nested_fields", nested);
    }
    for field in &collection.fields {
        block.block(field_block(field, address, variables));
    }
    block.render()
}

/// Render a legacy `typesense_synonym` resource.
pub(crate) fn render_synonym(address: &str, collection_name: &str, synonym: &Synonym) -> String {
    let mut block = Block::resource("typesense_synonym", address);
    block.attr_str("collection", collection_name);
    block.attr_str("name", &synonym.id);
    block.attr_str_list("synonyms", &synonym.synonyms);
    if let Some(root) = &synonym.root {
        block.attr_str("root", root);
    }
    if let Some(locale) = &synonym.locale {
        block.attr_str("locale", locale);
    }
    block.render()
}

/// Render a `typesense_synonym_set` resource (server >= 30).
pub(crate) fn render_synonym_set(address: &str, set: &SynonymSet) -> String {
    let mut block = Block::resource("typesense_synonym_set", address);
    block.attr_str("name", &set.name);
    for item in &set.items {
        let mut item_block = Block::nested("items");
        item_block.attr_str("id", &item.id);
        item_block.attr_str_list("synonyms", &item.synonyms);
        if let Some(root) = &item.root {
            item_block.attr_str("root", root);
        }
        if let Some(locale) = &item.locale {
            item_block.attr_str("locale", locale);
        }
        block.block(item_block);
    }
    block.render()
}

fn override_body(block: &mut Block, entry: &Override) {
    let mut rule = Block::nested("rule");
    if let Some(query) = &entry.rule.query {
        rule.attr_str("query", query);
    }
    if let Some(match_type) = &entry.rule.match_type {
        rule.attr_str("match", match_type);
    }
    if let Some(tags) = &entry.rule.tags {
        rule.attr_str_list("tags", tags);
    }
    if let Some(filter_by) = &entry.rule.filter_by {
        rule.attr_str("filter_by", filter_by);
    }
    block.block(rule);

    for include in entry.includes.iter().flatten() {
        let mut inc = Block::nested("includes");
        inc.attr_str("id", &include.id);
        inc.attr_int("position", i64::from(include.position));
        block.block(inc);
    }
    for exclude in entry.excludes.iter().flatten() {
        let mut exc = Block::nested("excludes");
        exc.attr_str("id", &exclude.id);
        block.block(exc);
    }
    if let Some(filter_by) = &entry.filter_by {
        block.attr_str("filter_by", filter_by);
    }
    if let Some(sort_by) = &entry.sort_by {
        block.attr_str("sort_by", sort_by);
    }
    if let Some(replace_query) = &entry.replace_query {
        block.attr_str("replace_query", replace_query);
    }
    if let Some(remove) = entry.remove_matched_tokens {
        block.attr_bool("remove_matched_tokens", remove);
    }
    if let Some(filter_curated) = entry.filter_curated_hits {
        block.attr_bool("filter_curated_hits", filter_curated);
    }
    if let Some(from_ts) = entry.effective_from_ts {
        block.attr_int("effective_from_ts", from_ts);
    }
    if let Some(to_ts) = entry.effective_to_ts {
        block.attr_int("effective_to_ts", to_ts);
    }
    if let Some(stop) = entry.stop_processing {
        block.attr_bool("stop_processing", stop);
    }
    if let Some(metadata) = &entry.metadata {
        block.attr_raw("metadata", jsonencode(metadata));
    }
}

/// Render a legacy `typesense_override` resource.
pub(crate) fn render_override(address: &str, collection_name: &str, entry: &Override) -> String {
    let mut block = Block::resource("typesense_override", address);
    block.attr_str("collection", collection_name);
    block.attr_str("name", &entry.id);
    override_body(&mut block, entry);
    block.render()
}

/// Render a `typesense_curation_set` resource (server >= 30).
pub(crate) fn render_curation_set(
    address: &str,
    set: &typesense_client::models::CurationSet,
) -> String {
    let mut block = Block::resource("typesense_curation_set", address);
    block.attr_str("name", &set.name);
    for item in &set.items {
        let mut item_block = Block::nested("items");
        item_block.attr_str("id", &item.id);
        override_body(&mut item_block, item);
        block.block(item_block);
    }
    block.render()
}

/// Render a `typesense_stopwords_set` resource.
pub(crate) fn render_stopwords_set(address: &str, set: &StopwordsSet) -> String {
    let mut block = Block::resource("typesense_stopwords_set", address);
    block.attr_str("name", &set.id);
    block.attr_str_list("stopwords", &set.stopwords);
    if let Some(locale) = &set.locale {
        block.attr_str("locale", locale);
    }
    block.render()
}

/// Render a `typesense_api_key` resource.
///
/// The plaintext value was returned exactly once at creation and is not
/// recoverable; a placeholder variable is referenced instead.
pub(crate) fn render_api_key(
    address: &str,
    key: &ApiKey,
    variables: &mut Vec<Variable>,
) -> String {
    let mut block = Block::resource("typesense_api_key", address);
    block.attr_str("description", &key.description);
    block.attr_str_list("actions", &key.actions);
    block.attr_str_list("collections", &key.collections);
    if let Some(expires_at) = key.expires_at {
        block.attr_int("expires_at", expires_at);
    }
    let var_name = format!("{}_value", address);
    block.comment("key values are returned only at creation time and cannot be recovered;");
    block.comment("supply this one externally when adopting the key");
    block.attr_raw("value", format!("var.{}", var_name));
    variables.push(Variable {
        name: var_name,
        description: format!("Value of API key {} ({})", key.id, key.description),
        sensitive: true,
    });
    block.render()
}

/// Render a `typesense_alias` resource.
pub(crate) fn render_alias(address: &str, alias: &CollectionAlias) -> String {
    let mut block = Block::resource("typesense_alias", address);
    block.attr_str("name", &alias.name);
    block.attr_str("collection_name", &alias.collection_name);
    block.render()
}

/// Render a `typesense_preset` resource.
pub(crate) fn render_preset(address: &str, preset: &Preset) -> String {
    let mut block = Block::resource("typesense_preset", address);
    block.attr_str("name", &preset.name);
    block.attr_raw("value", jsonencode(&preset.value));
    block.render()
}

/// Render a `typesense_analytics_rule` resource.
pub(crate) fn render_analytics_rule(address: &str, rule: &AnalyticsRule) -> String {
    let mut block = Block::resource("typesense_analytics_rule", address);
    block.attr_str("name", &rule.name);
    block.attr_str("type", &rule.rule_type);
    if let Some(collection) = &rule.collection {
        block.attr_str("collection", collection);
    }
    if let Some(event_type) = &rule.event_type {
        block.attr_str("event_type", event_type);
    }
    if let Some(params) = &rule.params {
        block.attr_raw("params", jsonencode(params));
    }
    block.render()
}

/// Render a `typesense_cluster` resource (cloud).
pub(crate) fn render_cluster(address: &str, cluster: &Cluster) -> String {
    let mut block = Block::resource("typesense_cluster", address);
    if let Some(name) = &cluster.name {
        block.attr_str("name", name);
    }
    block.attr_str("memory", &cluster.memory);
    block.attr_str("vcpu", &cluster.vcpu);
    if let Some(ha) = &cluster.high_availability {
        block.attr_str("high_availability", ha);
    }
    if let Some(version) = &cluster.typesense_server_version {
        block.attr_str("typesense_server_version", version);
    }
    if !cluster.regions.is_empty() {
        block.attr_str_list("regions", &cluster.regions);
    }
    if let Some(auto_upgrade) = cluster.auto_upgrade_capacity {
        block.attr_bool("auto_upgrade_capacity", auto_upgrade);
    }
    block.render()
}
