//! HTML template for the static redirect pages.

/// Render one complete redirect page.
///
/// Pure function of its four inputs, which are embedded verbatim: the
/// caller supplies trusted strings and no HTML escaping is applied. The
/// page carries Open Graph and Twitter Card tags for link-preview
/// crawlers, a meta-refresh redirect, a script redirect for clients that
/// ignore meta-refresh, and a Spanish fallback link.
pub fn render_page(title: &str, description: &str, og_url: &str, redirect_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>

    <!-- Open Graph Meta Tags -->
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:type" content="website">
    <meta property="og:url" content="{og_url}">

    <!-- Twitter Card Meta Tags -->
    <meta name="twitter:card" content="summary">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{description}">

    <!-- Redirect to SPA -->
    <meta http-equiv="refresh" content="0; url={redirect_url}">

    <!-- Fallback redirect with JavaScript -->
    <script>
        window.location.replace('{redirect_url}');
    </script>

    <style>
        body {{
            font-family: Arial, sans-serif;
            text-align: center;
            padding: 50px;
            background: #f9f1e3;
            color: #333;
        }}
        .loading {{
            font-size: 18px;
            margin: 20px 0;
        }}
        .redirecting {{
            font-size: 14px;
            color: #666;
        }}
    </style>
</head>
<body>
    <div class="loading">Cargando visualización...</div>
    <div class="redirecting">Redirigiendo a la aplicación interactiva...</div>
    <p>Si no eres redirigido automáticamente, <a href="{redirect_url}">haz clic aquí</a>.</p>
</body>
</html>"#
    )
}
