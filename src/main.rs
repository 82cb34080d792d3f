use std::time::Instant;

use clap::{Parser, Subcommand};

use summa_extract::cache::QuestionCache;
use summa_extract::model::{Article, BilingualText, Question};
use summa_extract::parts::{PartId, PARTS};
use summa_extract::routes;
use summa_extract::source::SourceDir;

#[derive(Parser)]
#[command(name = "summa-extract", about = "Structural extractor for the Summa markup corpus")]
struct Cli {
    /// Directory holding the source files ({CODE}{QQQ}.html)
    #[arg(long, default_value = "texts", global = true)]
    dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the five parts and their question counts
    Parts,
    /// Parse one question and print it
    Show {
        /// Part code (FP, FS, SS, TP, XP)
        #[arg(short, long)]
        part: String,
        /// Question number
        #[arg(short, long)]
        question: u32,
        /// Show a single article instead of the whole question
        #[arg(short, long)]
        article: Option<u32>,
        /// Emit JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Parse every available question and print corpus statistics
    Scan {
        /// Restrict to one part
        #[arg(short, long)]
        part: Option<String>,
        /// Max questions to parse
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print every question and article route
    Routes {
        /// Restrict to one part
        #[arg(short, long)]
        part: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let source = SourceDir::new(&cli.dir);

    let result = match cli.command {
        Commands::Parts => {
            println!("{:<4} | {:<32} | {:<18} | {:>9}", "Code", "Name", "Latin", "Questions");
            println!("{}", "-".repeat(72));
            for p in &PARTS {
                println!("{:<4} | {:<32} | {:<18} | {:>9}", p.code, p.name, p.latin_name, p.questions);
            }
            Ok(())
        }
        Commands::Show { part, question, article, json } => {
            let part = parse_part(&part)?;
            let cache = QuestionCache::new(source);
            let Some(parsed) = cache.load(part, question)? else {
                println!("Not found: {} question {} has no source file.", part.code(), question);
                std::process::exit(1);
            };
            match article {
                Some(n) => {
                    let Some(found) = parsed.articles.iter().find(|a| a.number == n) else {
                        println!("Question {} has no article {}.", question, n);
                        std::process::exit(1);
                    };
                    if json {
                        println!("{}", serde_json::to_string_pretty(found)?);
                    } else {
                        print_article(found);
                    }
                }
                None => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&*parsed)?);
                    } else {
                        print_question(&parsed);
                    }
                }
            }
            Ok(())
        }
        Commands::Scan { part, limit } => {
            let part = part.as_deref().map(parse_part).transpose()?;
            scan(source, part, limit)
        }
        Commands::Routes { part } => {
            let part = part.as_deref().map(parse_part).transpose()?;
            let cache = QuestionCache::new(source);
            for route in routes::enumerate(&cache, part)? {
                println!("{}", route);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn parse_part(code: &str) -> anyhow::Result<PartId> {
    PartId::from_code(code)
        .ok_or_else(|| anyhow::anyhow!("unknown part code '{}' (expected FP, FS, SS, TP or XP)", code))
}

fn print_question(q: &Question) {
    println!("{} Q{}: {}", q.part.code(), q.number, q.title);
    if !q.prologue.is_empty() {
        println!("\nPrologue:\n{}", indent(preview(&q.prologue)));
    }
    println!("\n{} article(s):", q.articles.len());
    for a in &q.articles {
        let title = if a.title.is_empty() { "(untitled)" } else { a.title.as_str() };
        println!(
            "  A{}: {} [{} objection(s), {} repl(ies){}{}]",
            a.number,
            title,
            a.objections.len(),
            a.replies.len(),
            if a.thesis.is_empty() { ", recovered" } else { "" },
            if a.thesis.latin.is_empty() { "" } else { ", bilingual" },
        );
    }
}

fn print_article(a: &Article) {
    let title = if a.title.is_empty() { "(untitled)" } else { a.title.as_str() };
    println!("{} Q{} A{}: {}", a.part.code(), a.question, a.number, title);
    for (label, text) in [
        ("Thesis", &a.thesis),
        ("Sed contra", &a.sed_contra),
        ("Respondeo", &a.respondeo),
    ] {
        if !text.is_empty() {
            println!("\n{}:\n{}", label, indent(preview(text)));
        }
    }
    for o in &a.objections {
        println!("\nObjection {}:\n{}", o.number, indent(preview(&o.text)));
    }
    for r in &a.replies {
        println!("\nReply {}:\n{}", r.number, indent(preview(&r.text)));
    }
}

fn preview(text: &BilingualText) -> String {
    let mut out = String::new();
    if !text.latin.is_empty() {
        out.push_str(&truncate(&text.latin, 160));
        out.push('\n');
    }
    out.push_str(&truncate(&text.english, 160));
    out
}

fn indent(s: String) -> String {
    s.lines().map(|l| format!("    {}", l)).collect::<Vec<_>>().join("\n")
}

struct ScanCounts {
    questions: usize,
    missing: usize,
    articles: usize,
    recovered: usize,
    bilingual: usize,
}

fn scan(source: SourceDir, part: Option<PartId>, limit: Option<usize>) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let parts: Vec<PartId> = PARTS
        .iter()
        .map(|p| p.id)
        .filter(|id| part.is_none() || part == Some(*id))
        .collect();

    let mut targets: Vec<(PartId, u32)> = Vec::new();
    let mut missing = 0usize;
    for id in parts {
        let available = source.available_questions(id);
        missing += id.part().questions as usize - available.len();
        targets.extend(available.into_iter().map(|q| (id, q)));
    }
    if let Some(n) = limit {
        targets.truncate(n);
    }
    if targets.is_empty() {
        println!("No source files found under '{}'.", source.root().display());
        return Ok(());
    }

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let cache = QuestionCache::new(source);
    let parsed: Vec<_> = targets
        .par_iter()
        .filter_map(|&(id, q)| {
            let loaded = cache.load(id, q).ok().flatten();
            pb.inc(1);
            loaded
        })
        .collect();
    pb.finish_and_clear();

    let mut counts = ScanCounts {
        questions: parsed.len(),
        missing,
        articles: 0,
        recovered: 0,
        bilingual: 0,
    };
    for q in &parsed {
        counts.articles += q.articles.len();
        counts.recovered += q.articles.iter().filter(|a| a.thesis.is_empty()).count();
        counts.bilingual += q.articles.iter().filter(|a| !a.thesis.latin.is_empty()).count();
    }

    println!("Questions parsed:    {}", counts.questions);
    println!("Missing sources:     {}", counts.missing);
    println!("Articles:            {}", counts.articles);
    println!("  recovered:         {}", counts.recovered);
    println!("  bilingual thesis:  {}", counts.bilingual);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
