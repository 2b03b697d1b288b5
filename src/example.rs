//! The canned example document the welcome page offers to load.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// A complete landing page exercising sections, nested divs, images, and
/// buttons with custom styling.
pub const EXAMPLE_DOCUMENT: &str = r##"title: Earth & Soul

body:
  style:
    background-color: "#f5f5f0"
    color: "#2c3e2d"
    font-family: "Cormorant Garamond, serif"
    font-size: "16px"
    line-height: "1.6"
    margin: "0"
    padding: "0"
  children:
    - type: section
      style:
        background-image: "url('https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80')"
        background-size: "cover"
        background-position: "center"
        height: "100vh"
        display: "flex"
        flex-direction: "column"
        justify-content: "center"
        align-items: "center"
        text-align: "center"
        position: "relative"
        border-radius: "0px"
      children:
        - type: div
          style:
            background-color: "rgba(44, 62, 45, 0.7)"
            padding: "40px"
            border-radius: "8px"
            max-width: "800px"
            margin: "0 20px"
            display: "flex"
            flex-direction: "column"
            align-items: "center"
          children:
            - type: header
              text: "Reconnect with Nature"
              style:
                color: "#f5f5f0"
                font-size: "64px"
                font-weight: "300"
                margin-bottom: "20px"
                font-family: "Cormorant Garamond, serif"
                text-align: "center"
            - type: paragraph
              text: "Discover sustainable living, eco-friendly products, and mindful practices for a harmonious life with nature."
              style:
                color: "#f5f5f0"
                font-size: "24px"
                font-weight: "300"
                margin-bottom: "40px"
                font-family: "Cormorant Garamond, serif"
                text-align: "center"
            - type: button
              text: "Begin Your Journey"
              link: "#explore"
              style:
                background-color: "#8ba888"
                color: "#f5f5f0"
                padding: "16px 40px"
                border-radius: "30px"
                font-weight: "500"
                font-size: "18px"
                border: "none"
                cursor: "pointer"
                transition: "all 0.3s"
                font-family: "Montserrat, sans-serif"
                letter-spacing: "1px"
                text-align: "center"

    - type: section
      style:
        padding: "40px 20px"
        background-color: "#f5f5f0"
        border-radius: "0px"
      children:
        - type: header
          text: "Latest from Our Blog"
          style:
            color: "#2c3e2d"
            font-size: "42px"
            font-weight: "300"
            margin-bottom: "60px"
            text-align: "center"
            font-family: "Cormorant Garamond, serif"
        - type: div
          style:
            display: "grid"
            grid-template-columns: "repeat(auto-fit, minmax(300px, 1fr))"
            gap: "40px"
            max-width: "1200px"
            margin: "0 auto"
          children:
            - type: div
              style:
                background-color: "#ffffff"
                border-radius: "12px"
                overflow: "hidden"
                box-shadow: "0 4px 20px rgba(44, 62, 45, 0.1)"
              children:
                - type: image
                  src: "https://images.unsplash.com/photo-1502086223501-7ea6ecd79368?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                  alt: "Sustainable Living"
                  style:
                    width: "100%"
                    height: "250px"
                    object-fit: "cover"
                - type: div
                  style:
                    padding: "30px"
                  children:
                    - type: header
                      text: "Mindful Living in the Digital Age"
                      style:
                        color: "#2c3e2d"
                        font-size: "24px"
                        font-weight: "500"
                        margin-bottom: "15px"
                        font-family: "Montserrat, sans-serif"
                    - type: paragraph
                      text: "Finding balance between technology and nature in our modern world."
                      style:
                        color: "#5c6c5c"
                        font-size: "16px"
                        line-height: "1.6"
                        font-family: "Montserrat, sans-serif"
            - type: div
              style:
                background-color: "#ffffff"
                border-radius: "12px"
                overflow: "hidden"
                box-shadow: "0 4px 20px rgba(44, 62, 45, 0.1)"
              children:
                - type: image
                  src: "https://images.unsplash.com/photo-1518495973542-4542c06a5843?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                  alt: "Eco Products"
                  style:
                    width: "100%"
                    height: "250px"
                    object-fit: "cover"
                - type: div
                  style:
                    padding: "30px"
                  children:
                    - type: header
                      text: "Eco-Friendly Home Essentials"
                      style:
                        color: "#2c3e2d"
                        font-size: "24px"
                        font-weight: "500"
                        margin-bottom: "15px"
                        font-family: "Montserrat, sans-serif"
                    - type: paragraph
                      text: "Transform your living space with sustainable and natural products."
                      style:
                        color: "#5c6c5c"
                        font-size: "16px"
                        line-height: "1.6"
                        font-family: "Montserrat, sans-serif"
            - type: div
              style:
                background-color: "#ffffff"
                border-radius: "12px"
                overflow: "hidden"
                box-shadow: "0 4px 20px rgba(44, 62, 45, 0.1)"
              children:
                - type: image
                  src: "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
                  alt: "Nature Connection"
                  style:
                    width: "100%"
                    height: "250px"
                    object-fit: "cover"
                - type: div
                  style:
                    padding: "30px"
                  children:
                    - type: header
                      text: "The Healing Power of Nature"
                      style:
                        color: "#2c3e2d"
                        font-size: "24px"
                        font-weight: "500"
                        margin-bottom: "15px"
                        font-family: "Montserrat, sans-serif"
                    - type: paragraph
                      text: "Exploring the profound impact of nature on our mental and physical wellbeing."
                      style:
                        color: "#5c6c5c"
                        font-size: "16px"
                        line-height: "1.6"
                        font-family: "Montserrat, sans-serif"

    - type: section
      style:
        background-color: "#8ba888"
        padding: "80px 20px"
        text-align: "center"
        border-radius: "0px"
      children:
        - type: header
          text: "Join Our Community"
          style:
            color: "#f5f5f0"
            font-size: "42px"
            font-weight: "300"
            margin-bottom: "20px"
            font-family: "Cormorant Garamond, serif"
        - type: paragraph
          text: "Subscribe to our newsletter for mindful living tips, sustainable product updates, and exclusive content."
          style:
            color: "#f5f5f0"
            font-size: "18px"
            margin-bottom: "40px"
            max-width: "600px"
            margin-left: "auto"
            margin-right: "auto"
            font-family: "Montserrat, sans-serif"
        - type: div
          style:
            max-width: "500px"
            margin: "0 auto"
            display: "flex"
            gap: "10px"
            justify-content: "center"
          children:
            - type: input
              type: "email"
              placeholder: "Enter your email"
              style:
                width: "60%"
                padding: "15px 20px"
                border: "none"
                border-radius: "30px"
                font-size: "16px"
                font-family: "Montserrat, sans-serif"
            - type: button
              text: "Subscribe"
              style:
                background-color: "#2c3e2d"
                color: "#f5f5f0"
                padding: "15px 30px"
                border-radius: "30px"
                font-weight: "500"
                font-size: "16px"
                border: "none"
                cursor: "pointer"
                transition: "all 0.3s"
                font-family: "Montserrat, sans-serif"
                white-space: "nowrap"
"##;

/// Print the example to stdout, or write it to `out`.
pub fn emit_example(out: Option<&Path>, quiet: bool) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            std::fs::write(path, EXAMPLE_DOCUMENT)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            if !quiet {
                println!("{} {}", "Wrote example".green().bold(), path.display());
            }
        }
        None => print!("{EXAMPLE_DOCUMENT}"),
    }
    Ok(())
}
