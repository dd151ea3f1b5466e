//! The template helper registry
//!
//! A fixed name-to-function table installed into the engine once, at
//! construction. Helpers that produce display text write straight to the
//! output (and are therefore never HTML-escaped — markdown, safeHTML and
//! the download URI depend on that); helpers that feed `#if`/`#each`
//! subexpressions implement `call_inner` and return real JSON values.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonRender, Output, RenderContext,
    RenderError, ScopedJson,
};
use serde_json::{Value, json};
use std::sync::Arc;
use veneer_i18n::Localizations;

/// Register the full helper registry.
pub fn register_helpers(handlebars: &mut Handlebars<'static>, localizations: Arc<Localizations>) {
    handlebars.register_helper("humanSize", Box::new(human_size_helper));
    handlebars.register_helper("safeHTML", Box::new(safe_html_helper));
    handlebars.register_helper("dateFormat", Box::new(date_format_helper));
    handlebars.register_helper("dateFormatYYYYMMDD", Box::new(date_format_yyyy_mm_dd_helper));
    handlebars.register_helper("datePeriodFormat", Box::new(date_period_format_helper));
    handlebars.register_helper("last", Box::new(LastHelper));
    handlebars.register_helper("loop", Box::new(LoopHelper));
    handlebars.register_helper("subtract", Box::new(SubtractHelper));
    handlebars.register_helper("slug", Box::new(slug_helper));
    handlebars.register_helper(
        "legacyDataSetDownloadURI",
        Box::new(legacy_dataset_download_uri_helper),
    );
    handlebars.register_helper("markdown", Box::new(markdown_helper));
    handlebars.register_helper("localise", Box::new(LocaliseHelper { localizations }));
    handlebars.register_helper("domainSetLang", Box::new(domain_set_lang_helper));
    handlebars.register_helper("hasField", Box::new(HasFieldHelper));
    handlebars.register_helper("notLastItem", Box::new(NotLastItemHelper));
    handlebars.register_helper("concatenateStrings", Box::new(concatenate_strings_helper));
    handlebars.register_helper(
        "truncateToMaximumCharacters",
        Box::new(truncate_to_maximum_characters_helper),
    );
}

/// Byte count to human-readable magnitude: {{humanSize size}}
///
/// A non-numeric size fails the whole render, like any other helper error.
fn human_size_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("humanSize requires 1 parameter"))?;

    let formatted = veneer_text::human_size(&param.value().render())
        .map_err(|err| RenderError::new(err.to_string()))?;
    out.write(&formatted)?;
    Ok(())
}

/// Emit a value without HTML escaping: {{safeHTML fragment}}
fn safe_html_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("safeHTML requires 1 parameter"))?;

    out.write(&param.value().render())?;
    Ok(())
}

/// RFC3339 timestamp as "02 January 2006": {{dateFormat release_date}}
fn date_format_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("dateFormat requires 1 parameter"))?;

    out.write(&veneer_text::date_format(&param.value().render()))?;
    Ok(())
}

/// RFC3339 timestamp as "2006/01/02": {{dateFormatYYYYMMDD release_date}}
fn date_format_yyyy_mm_dd_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("dateFormatYYYYMMDD requires 1 parameter"))?;

    out.write(&veneer_text::date_format_yyyy_mm_dd(&param.value().render()))?;
    Ok(())
}

/// Period code to human phrase: {{datePeriodFormat period}}
fn date_period_format_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("datePeriodFormat requires 1 parameter"))?;

    out.write(&veneer_text::date_period_format(&param.value().render()))?;
    Ok(())
}

/// True for the final index of a sequence: {{#if (last @index items)}}
struct LastHelper;

impl HelperDef for LastHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let index = h
            .param(0)
            .and_then(|p| p.value().as_u64())
            .ok_or_else(|| RenderError::new("last requires an index and a sequence"))?;
        let sequence = h
            .param(1)
            .ok_or_else(|| RenderError::new("last requires an index and a sequence"))?;

        let len = sequence_len(sequence.value());
        Ok(ScopedJson::Derived(json!(veneer_text::is_last(
            index as usize,
            len
        ))))
    }
}

/// The integers [n, m): {{#each (loop 0 5)}}
struct LoopHelper;

impl HelperDef for LoopHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let n = h
            .param(0)
            .and_then(|p| p.value().as_i64())
            .ok_or_else(|| RenderError::new("loop requires 2 integer parameters"))?;
        let m = h
            .param(1)
            .and_then(|p| p.value().as_i64())
            .ok_or_else(|| RenderError::new("loop requires 2 integer parameters"))?;

        Ok(ScopedJson::Derived(json!(veneer_text::loop_range(n, m))))
    }
}

/// Integer subtraction: {{subtract total 1}}
struct SubtractHelper;

impl HelperDef for SubtractHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let x = h
            .param(0)
            .and_then(|p| p.value().as_i64())
            .ok_or_else(|| RenderError::new("subtract requires 2 integer parameters"))?;
        let y = h
            .param(1)
            .and_then(|p| p.value().as_i64())
            .ok_or_else(|| RenderError::new("subtract requires 2 integer parameters"))?;

        Ok(ScopedJson::Derived(json!(veneer_text::subtract(x, y))))
    }
}

/// URL-safe slug: {{slug title}}
fn slug_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("slug requires 1 parameter"))?;

    out.write(&veneer_text::slugify(&param.value().render()))?;
    Ok(())
}

/// Legacy dataset download link, inserted verbatim into an href:
/// {{legacyDataSetDownloadURI uri filename}}
fn legacy_dataset_download_uri_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let page_uri = h
        .param(0)
        .ok_or_else(|| RenderError::new("legacyDataSetDownloadURI requires 2 parameters"))?;
    let filename = h
        .param(1)
        .ok_or_else(|| RenderError::new("legacyDataSetDownloadURI requires 2 parameters"))?;

    out.write(&veneer_text::legacy_dataset_download_uri(
        &page_uri.value().render(),
        &filename.value().render(),
    ))?;
    Ok(())
}

/// Markdown to trusted HTML: {{markdown body}}
fn markdown_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| RenderError::new("markdown requires 1 parameter"))?;

    out.write(&veneer_text::markdown(&param.value().render()))?;
    Ok(())
}

/// Localised text by key: {{localise "Key" language plural arg0 arg1 …}}
struct LocaliseHelper {
    localizations: Arc<Localizations>,
}

impl HelperDef for LocaliseHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let key = h
            .param(0)
            .ok_or_else(|| RenderError::new("localise requires a lookup key"))?
            .value()
            .render();
        let language = h
            .param(1)
            .map(|p| p.value().render())
            .unwrap_or_default();
        let plural_count = h.param(2).and_then(|p| p.value().as_i64()).unwrap_or(1);
        let args: Vec<String> = h
            .params()
            .iter()
            .skip(3)
            .map(|p| p.value().render())
            .collect();

        out.write(
            &self
                .localizations
                .localise(&key, &language, plural_count, &args),
        )?;
        Ok(())
    }
}

/// Language-scoped canonical URL: {{domainSetLang site_domain uri language}}
fn domain_set_lang_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let domain = h
        .param(0)
        .ok_or_else(|| RenderError::new("domainSetLang requires 3 parameters"))?;
    let uri = h
        .param(1)
        .ok_or_else(|| RenderError::new("domainSetLang requires 3 parameters"))?;
    let language = h
        .param(2)
        .ok_or_else(|| RenderError::new("domainSetLang requires 3 parameters"))?;

    out.write(&veneer_i18n::set_language(
        &domain.value().render(),
        &uri.value().render(),
        &language.value().render(),
    ))?;
    Ok(())
}

/// Field presence on the serialized page data: {{#if (hasField this "uri")}}
struct HasFieldHelper;

impl HelperDef for HasFieldHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let data = h
            .param(0)
            .ok_or_else(|| RenderError::new("hasField requires a value and a field name"))?;
        let name = h
            .param(1)
            .ok_or_else(|| RenderError::new("hasField requires a value and a field name"))?
            .value()
            .render();

        let present = data
            .value()
            .as_object()
            .is_some_and(|fields| fields.contains_key(&name));
        Ok(ScopedJson::Derived(json!(present)))
    }
}

/// True for every index except the final one: {{#if (notLastItem len @index)}}
struct NotLastItemHelper;

impl HelperDef for NotLastItemHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let length = h
            .param(0)
            .and_then(|p| p.value().as_u64())
            .ok_or_else(|| RenderError::new("notLastItem requires a length and an index"))?;
        let index = h
            .param(1)
            .and_then(|p| p.value().as_u64())
            .ok_or_else(|| RenderError::new("notLastItem requires a length and an index"))?;

        Ok(ScopedJson::Derived(json!(veneer_text::not_last_item(
            length as usize,
            index as usize
        ))))
    }
}

/// Ordered concatenation of every argument: {{concatenateStrings a b c}}
fn concatenate_strings_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let tokens: Vec<String> = h.params().iter().map(|p| p.value().render()).collect();
    out.write(&veneer_text::concatenate(tokens))?;
    Ok(())
}

/// Bounded text with an ellipsis: {{truncateToMaximumCharacters text 100}}
fn truncate_to_maximum_characters_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h
        .param(0)
        .ok_or_else(|| RenderError::new("truncateToMaximumCharacters requires 2 parameters"))?
        .value()
        .render();
    let max_length = h
        .param(1)
        .and_then(|p| p.value().as_u64())
        .ok_or_else(|| {
            RenderError::new("truncateToMaximumCharacters requires a maximum length")
        })?;

    out.write(&veneer_text::truncate_to_maximum_characters(
        &text,
        max_length as usize,
    ))?;
    Ok(())
}

fn sequence_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
