//! Environments whose bodies the grammar treats specially.

/// Bodies captured literally up to `\end{name}`.
pub fn is_verbatim(name: &str) -> bool {
    matches!(
        name,
        "verbatim" | "verbatim*" | "Verbatim" | "lstlisting" | "minted" | "comment"
    )
}

/// Display math bodies: parsed, but the closer wins over comments.
pub fn is_math(name: &str) -> bool {
    matches!(
        name,
        "equation"
            | "equation*"
            | "align"
            | "align*"
            | "alignat"
            | "alignat*"
            | "gather"
            | "gather*"
            | "multline"
            | "multline*"
            | "flalign"
            | "flalign*"
            | "eqnarray"
            | "eqnarray*"
            | "math"
            | "displaymath"
    )
}

/// Bodies segmented at `\item`.
pub fn is_list(name: &str) -> bool {
    matches!(name, "itemize" | "enumerate" | "description")
}
