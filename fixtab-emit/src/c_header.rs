use fixtab_core::Table;

/// Naming and layout for one family of emitted C table blocks.
///
/// The guard macro lets the consumer select a width at its own build time:
/// every width's block is emitted, wrapped in `#if GUARD == bits`, and the
/// consumer defines the guard to pick one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CTableStyle {
    /// Preprocessor selector, e.g. `RSQRT_TABLE_BITS`.
    pub guard: String,
    /// Array identifier, e.g. `rsqrt_table`.
    pub array: String,
    /// Emit `static` storage (internal linkage) on the array.
    pub static_storage: bool,
    /// Entries per source line; presentation only.
    pub per_row: usize,
}

impl CTableStyle {
    /// Derive the conventional identifiers from a table function name:
    /// `rsqrt` becomes guard `RSQRT_TABLE_BITS` and array `rsqrt_table`.
    pub fn for_fn(name: &str) -> Self {
        Self {
            guard: format!("{}_TABLE_BITS", name.to_uppercase()),
            array: format!("{}_table", name),
            static_storage: false,
            per_row: 8,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.static_storage = true;
        self
    }

    pub fn with_per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row.max(1);
        self
    }
}

/// Render one table as a guarded C block.
///
/// Entry order follows the table; a consumer indexes the array directly, so
/// this must stay bit-exact and in domain order. The trailing blank line
/// separates consecutive blocks when widths are concatenated.
pub fn render(table: &Table, style: &CTableStyle) -> String {
    let len = table.entries.len();
    let storage = if style.static_storage { "static " } else { "" };

    let mut out = String::new();
    out.push_str(&format!("#if {} == {}\n", style.guard, table.bits));
    out.push_str(&format!(
        "{}const uint16_t {}[{}] = {{\n",
        storage, style.array, len
    ));

    for (i, entry) in table.entries.iter().enumerate() {
        if i % style.per_row == 0 {
            out.push_str("    ");
        } else {
            out.push(' ');
        }
        out.push_str(&format!("0x{:04x},", entry));
        if (i + 1) % style.per_row == 0 || i + 1 == len {
            out.push('\n');
        }
    }

    out.push_str("};\n#endif\n\n");
    out
}
