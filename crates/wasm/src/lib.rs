//! WebAssembly bindings for the live-preview resolver.
//!
//! The page-builder editor needs token resolution and document compilation
//! while the author types, without a server round trip, and it must agree
//! byte for byte with what server-side compilation will later produce.
//! These bindings export the *same* pure functions the server runs
//! ([`tessera_tokens::resolve`], [`tessera_content::compile`],
//! [`tessera_css::generate`]); there is no preview reimplementation to
//! drift out of sync.
//!
//! # Example
//!
//! ```javascript
//! import init, { resolveToken, compileDocument, generateCss } from '@tessera/wasm';
//!
//! await init();
//!
//! const tree = { colors: { primary: { "500": "#3b82f6" } } };
//! resolveToken("colors.primary.500", tree);          // "#3b82f6"
//! compileDocument({ root: "header", content: [...] }, tree, false);
//! generateCss(tree);                                 // ":root { ... }"
//! ```

use wasm_bindgen::prelude::*;

use tessera_content::{compile, CompileOptions, CompilePolicy, ContentDocument};
use tessera_css::generate;
use tessera_tokens::{resolve, TokenRef, TokenTree};

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// Called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the tessera-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_tree(tree: JsValue) -> Result<TokenTree, JsError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    TokenTree::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Resolves a dot-path token reference against a token tree, returning the
/// literal value. Mirrors server-side resolution exactly.
#[wasm_bindgen(js_name = resolveToken)]
pub fn resolve_token(path: &str, tree: JsValue) -> Result<JsValue, JsError> {
    let tree = parse_tree(tree)?;
    let reference = TokenRef::path(path).map_err(|e| JsError::new(&e.to_string()))?;
    let literal = resolve(&reference, &tree).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&literal).map_err(|e| JsError::new(&e.to_string()))
}

/// Compiles a content document against a token tree, replacing theme
/// references with resolved literals. `strict` selects the fail-fast
/// policy; the default (false) substitutes visible `unresolved:` markers.
#[wasm_bindgen(js_name = compileDocument)]
pub fn compile_document(document: JsValue, tree: JsValue, strict: bool) -> Result<JsValue, JsError> {
    let document: ContentDocument =
        serde_wasm_bindgen::from_value(document).map_err(|e| JsError::new(&e.to_string()))?;
    let tree = parse_tree(tree)?;

    let options = CompileOptions {
        policy: if strict {
            CompilePolicy::Strict
        } else {
            CompilePolicy::BestEffort
        },
    };
    let compiled = compile(&document, &tree, options).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&compiled).map_err(|e| JsError::new(&e.to_string()))
}

/// Generates the `:root` custom-property block for a token tree, exactly
/// as the server's variables section will contain it.
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css(tree: JsValue) -> Result<String, JsError> {
    let tree = parse_tree(tree)?;
    generate(&tree).map_err(|e| JsError::new(&e.to_string()))
}
