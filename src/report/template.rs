//! Fixed page template for the gallery

pub const STYLE: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        h1 {
            text-align: center;
            color: #2c3e50;
            margin-bottom: 40px;
        }
        .tagline {
            text-align: center;
            color: #7f8c8d;
            font-size: 1.1em;
        }
        .diagram-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(500px, 1fr));
            gap: 30px;
            margin-top: 30px;
        }
        .diagram-item {
            border: 1px solid #ddd;
            border-radius: 8px;
            overflow: hidden;
            background: #fafafa;
        }
        .diagram-title {
            background: #3498db;
            color: white;
            padding: 15px;
            font-weight: bold;
            text-align: center;
        }
        .diagram-image {
            width: 100%;
            height: auto;
            display: block;
        }
        .diagram-description {
            padding: 15px;
            background: #ecf0f1;
            font-style: italic;
            color: #7f8c8d;
            font-size: 0.9em;
        }
        .summary {
            text-align: center;
            margin-top: 40px;
            padding: 20px;
            background: #ecf0f1;
            border-radius: 8px;
        }
        .summary h3 {
            color: #2c3e50;
            margin-bottom: 10px;
        }
        .summary p {
            color: #7f8c8d;
            font-size: 1.1em;
        }
"#;
