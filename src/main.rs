//! Wordle Minimax - CLI
//!
//! Interactive play plus offline solving, testing and ranking commands.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use wordle_minimax::{
    commands::{
        FIRST_STEP_CANDIDATES, RankConfig, SECOND_STEP_CANDIDATES, SolveConfig, TestAllConfig,
        analyze_word, idealized_average, optimal_first_word, print_test_all_statistics,
        rank_start_words, run_benchmark, run_test_all, solve_word,
    },
    core::{Pattern, Word},
    interactive::run_play,
    output::{
        print_analysis_result, print_benchmark_result, print_selection, print_solve_report,
        print_start_ranking,
    },
    solver::{FeedbackEngine, Solver, StepPolicy, StrategyPlan, narrow_possibilities},
    wordlists::{Dictionary, SMALL_POOL_STRIDE, WordSets, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver using minimax partitioning over a tuned step plan",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess pool: 'all' (default), 'answers', 'small' (every 32nd word), or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Targets for test-all, benchmark, first-word, rank-starts and analyze
    #[arg(short = 't', long, global = true, value_enum, default_value_t = TargetSet::Answers)]
    targets: TargetSet,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetSet {
    Answers,
    All,
    Difficult,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play (default): enter feedback for each suggested word
    Play {
        /// Step 1 policy: a word, 'optimal', 'alternates' or 'first'
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Solve a specific word
    Solve {
        /// Target word
        word: String,

        /// Opening word replacing the standard one
        #[arg(short, long)]
        start: Option<String>,

        /// Show words tied with each computed guess
        #[arg(short, long)]
        alternates: bool,

        /// Show policy and feedback for every step
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many steps
        #[arg(long)]
        step_limit: Option<usize>,
    },

    /// Solve every target and report the step distribution
    TestAll {
        /// Only the first N targets
        #[arg(short, long)]
        limit: Option<usize>,

        /// Stop once failures exceed this count
        #[arg(short, long)]
        max_fails: Option<usize>,

        /// Step 1 policy: a word, 'optimal', 'alternates' or 'first'
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Compute the minimax opening word against the targets
    FirstWord,

    /// Rank candidate words played at a given step by failures over the targets
    RankStarts {
        /// Candidate words (defaults depend on the step)
        words: Vec<String>,

        /// 1-based step the candidates are played at (default: the starting
        /// step, or 2 with --after)
        #[arg(long)]
        step: Option<usize>,

        /// Begin every solve at this 1-based step
        #[arg(long, default_value_t = 1)]
        starting_step: usize,

        /// Narrow the targets by a step 1 guess first, as guess=digits
        #[arg(long)]
        after: Option<String>,
    },

    /// Analyze how a word partitions the targets
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark on a random sample of targets
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the sample
        #[arg(long)]
        seed: Option<u64>,

        /// Step 1 policy: a word, 'optimal', 'alternates' or 'first'
        #[arg(short, long)]
        start: Option<String>,
    },
}

/// Load the dictionary selected by `--wordlist` and the guess pool drawn from it
fn load_word_sets(wordlist: &str) -> Result<(WordSets, Vec<Word>)> {
    let sets = match wordlist {
        "all" | "answers" | "small" => WordSets::embedded().context("embedded dictionary is empty")?,
        path => WordSets::with_dictionary(
            load_from_file(path).with_context(|| format!("loading word list from {path}"))?,
        ),
    };
    let pool = match wordlist {
        "answers" => sets.answers.clone(),
        "small" => sets.dictionary.every_nth(SMALL_POOL_STRIDE),
        _ => sets.dictionary.words().to_vec(),
    };
    Ok((sets, pool))
}

fn select_targets(sets: &WordSets, targets: TargetSet) -> Vec<Word> {
    match targets {
        TargetSet::Answers => sets.answers.clone(),
        TargetSet::All => sets.dictionary.words().to_vec(),
        TargetSet::Difficult => sets.difficult.clone(),
    }
}

/// The standard plan, with step 1 replaced when a start policy is given
fn standard_plan(dictionary: &Dictionary, start: Option<&str>) -> Result<StrategyPlan> {
    let plan = StrategyPlan::standard(dictionary);
    match start {
        Some(name) => Ok(plan.with_step(1, StepPolicy::from_name(name, dictionary)?)),
        None => Ok(plan),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (sets, pool) = load_word_sets(&cli.wordlist)?;
    let targets = select_targets(&sets, cli.targets);
    let engine = FeedbackEngine::for_dictionary(sets.dictionary.len());

    let command = cli.command.unwrap_or(Commands::Play { start: None });

    match command {
        Commands::Play { start } => {
            let plan = standard_plan(&sets.dictionary, start.as_deref())?;
            let mut solver = Solver::new(&engine, &pool, sets.dictionary.words(), plan);
            run_play(&mut solver)
        }
        Commands::Solve {
            word,
            start,
            alternates,
            verbose,
            step_limit,
        } => {
            let config = SolveConfig {
                start,
                alternates,
                step_limit,
                ..SolveConfig::new(word)
            };
            let plan = config.plan(&sets.dictionary)?;
            let solver = Solver::new(&engine, &pool, sets.dictionary.words(), plan);
            let report = solve_word(&config.target, &sets.dictionary, &solver)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::TestAll {
            limit,
            max_fails,
            start,
        } => {
            println!(
                "Idealized average for {} targets: {:.4}",
                targets.len(),
                idealized_average(targets.len())
            );
            let plan = standard_plan(&sets.dictionary, start.as_deref())?;
            let solver = Solver::new(&engine, &pool, &targets, plan);
            let stats = run_test_all(
                &solver,
                &targets,
                TestAllConfig {
                    max_fails,
                    limit,
                    show_progress: true,
                },
            )?;
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::FirstWord => {
            let selection = optimal_first_word(&engine, &pool, &targets)?;
            print_selection(&selection, targets.len());
            Ok(())
        }
        Commands::RankStarts {
            words,
            step,
            starting_step,
            after,
        } => {
            let placement = RankPlacement::resolve(step, starting_step, after.is_some())?;
            run_rank_starts(&sets.dictionary, &engine, &pool, targets, &words, placement, after.as_deref())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &sets.dictionary, &engine, &targets)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed, start } => {
            let plan = standard_plan(&sets.dictionary, start.as_deref())?;
            let solver = Solver::new(&engine, &pool, &targets, plan);
            let result = run_benchmark(&solver, &targets, count, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Where rank-starts plays its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankPlacement {
    step: usize,
    starting_step: usize,
}

impl RankPlacement {
    /// An `--after` guess takes step 1, so the candidates must come later
    fn resolve(step: Option<usize>, starting_step: usize, after: bool) -> Result<Self> {
        let starting_step = starting_step.max(1);
        if after && starting_step > 1 {
            return Err(anyhow!("--after plays step 1, which --starting-step {starting_step} skips"));
        }
        let step = step.unwrap_or(if after { 2 } else { starting_step });
        if after && step <= 1 {
            return Err(anyhow!("--after plays step 1, so --step must be 2 or later"));
        }
        if step < starting_step {
            return Err(anyhow!("--step {step} comes before --starting-step {starting_step}"));
        }
        Ok(Self {
            step,
            starting_step,
        })
    }
}

fn run_rank_starts(
    dictionary: &Dictionary,
    engine: &FeedbackEngine,
    pool: &[Word],
    mut targets: Vec<Word>,
    words: &[String],
    placement: RankPlacement,
    after: Option<&str>,
) -> Result<()> {
    let RankPlacement {
        step,
        starting_step,
    } = placement;
    let mut plan = StrategyPlan::standard(dictionary).with_starting_step(starting_step);

    if let Some(after) = after {
        let (text, digits) = after
            .split_once('=')
            .ok_or_else(|| anyhow!("--after expects guess=digits, got '{after}'"))?;
        let guess = dictionary.lookup(text);
        if !guess.is_valid() {
            return Err(anyhow!("'{text}' is not in the dictionary"));
        }
        let pattern = Pattern::from_digits(digits)
            .ok_or_else(|| anyhow!("'{digits}' is not five digits from 0, 1 and 2"))?;
        targets = narrow_possibilities(&targets, guess, pattern);
        plan = plan.with_step(1, StepPolicy::FixedWord(guess));
        println!("{} targets fit {text} = {digits}", targets.len());
    }

    let candidates = if words.is_empty() {
        let defaults: &[&str] = if step <= 1 {
            &FIRST_STEP_CANDIDATES
        } else {
            &SECOND_STEP_CANDIDATES
        };
        dictionary.subset(defaults.iter().copied())
    } else {
        words
            .iter()
            .map(|text| {
                let word = dictionary.lookup(text);
                if word.is_valid() {
                    Ok(word)
                } else {
                    Err(anyhow!("'{text}' is not in the dictionary"))
                }
            })
            .collect::<Result<Vec<_>>>()?
    };

    let ranking = rank_start_words(
        engine,
        pool,
        &targets,
        RankConfig { step, plan },
        &candidates,
    )?;
    print_start_ranking(&ranking);
    Ok(())
}
