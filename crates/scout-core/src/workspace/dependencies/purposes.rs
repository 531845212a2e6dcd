//! Known purposes for common npm packages

/// Exact-name purpose table
const KNOWN_PURPOSES: &[(&str, &str)] = &[
    // Frameworks
    ("react", "UI library"),
    ("react-dom", "React DOM renderer"),
    ("vue", "UI framework"),
    ("svelte", "UI framework"),
    ("@angular/core", "UI framework"),
    ("next", "React framework"),
    ("nuxt", "Vue framework"),
    ("express", "Web framework"),
    ("fastify", "Web framework"),
    ("koa", "Web framework"),
    ("hono", "Web framework"),
    ("@nestjs/core", "Server framework"),
    ("electron", "Desktop app framework"),
    ("ink", "Terminal UI rendering"),
    ("@oclif/core", "CLI framework"),
    // CLI tooling
    ("commander", "CLI argument parsing"),
    ("yargs", "CLI argument parsing"),
    ("meow", "CLI argument parsing"),
    ("inquirer", "Interactive prompts"),
    ("prompts", "Interactive prompts"),
    ("chalk", "Terminal styling"),
    ("ora", "Terminal spinners"),
    ("cli-table3", "Terminal tables"),
    ("boxen", "Terminal boxes"),
    // Data and validation
    ("zod", "Schema validation"),
    ("yup", "Schema validation"),
    ("joi", "Schema validation"),
    ("ajv", "JSON schema validation"),
    ("lodash", "Utility functions"),
    ("ramda", "Functional utilities"),
    ("date-fns", "Date utilities"),
    ("dayjs", "Date utilities"),
    ("moment", "Date utilities"),
    ("uuid", "UUID generation"),
    ("nanoid", "ID generation"),
    ("immer", "Immutable state"),
    // HTTP and networking
    ("axios", "HTTP client"),
    ("node-fetch", "HTTP client"),
    ("got", "HTTP client"),
    ("ky", "HTTP client"),
    ("undici", "HTTP client"),
    ("ws", "WebSocket library"),
    ("socket.io", "Realtime messaging"),
    ("graphql", "GraphQL implementation"),
    ("@apollo/client", "GraphQL client"),
    ("cors", "CORS middleware"),
    ("body-parser", "Request body parsing"),
    ("helmet", "Security headers"),
    // State and data fetching
    ("redux", "State management"),
    ("@reduxjs/toolkit", "State management"),
    ("zustand", "State management"),
    ("mobx", "State management"),
    ("@tanstack/react-query", "Data fetching"),
    ("swr", "Data fetching"),
    ("react-router", "Routing"),
    ("react-router-dom", "Routing"),
    // Persistence
    ("@prisma/client", "Database ORM"),
    ("prisma", "Database toolkit"),
    ("typeorm", "Database ORM"),
    ("sequelize", "Database ORM"),
    ("mongoose", "MongoDB ODM"),
    ("pg", "PostgreSQL client"),
    ("mysql2", "MySQL client"),
    ("redis", "Redis client"),
    ("ioredis", "Redis client"),
    ("better-sqlite3", "SQLite client"),
    // Configuration and environment
    ("dotenv", "Environment variables"),
    ("cross-env", "Environment variables"),
    ("conf", "Configuration storage"),
    // Logging
    ("winston", "Logging"),
    ("pino", "Logging"),
    ("debug", "Debug logging"),
    // AI SDKs
    ("openai", "OpenAI API client"),
    ("@anthropic-ai/sdk", "Anthropic API client"),
    ("ai", "AI SDK"),
    // Styling
    ("tailwindcss", "CSS framework"),
    ("postcss", "CSS processing"),
    ("autoprefixer", "CSS vendor prefixing"),
    ("sass", "CSS preprocessor"),
    ("styled-components", "CSS-in-JS"),
    // Build tooling
    ("typescript", "TypeScript compiler"),
    ("vite", "Build tool"),
    ("esbuild", "Bundler"),
    ("tsup", "Bundler"),
    ("rollup", "Bundler"),
    ("parcel", "Bundler"),
    ("tsx", "TypeScript execution"),
    ("ts-node", "TypeScript execution"),
    ("nodemon", "Development server reload"),
    ("concurrently", "Parallel script runner"),
    ("rimraf", "File removal"),
    ("husky", "Git hooks"),
    ("lint-staged", "Pre-commit linting"),
    // Testing
    ("jest", "Testing framework"),
    ("vitest", "Testing framework"),
    ("mocha", "Testing framework"),
    ("chai", "Assertion library"),
    ("sinon", "Test spies and stubs"),
    ("cypress", "End-to-end testing"),
    ("playwright", "End-to-end testing"),
    ("@playwright/test", "End-to-end testing"),
    ("supertest", "HTTP testing"),
    ("nock", "HTTP mocking"),
    ("msw", "API mocking"),
    // Linting and formatting
    ("eslint", "Linting"),
    ("prettier", "Code formatting"),
    ("biome", "Linting and formatting"),
    ("@biomejs/biome", "Linting and formatting"),
];

/// Purpose of a package: the exact table first, then name heuristics
pub fn dependency_purpose(name: &str) -> Option<&'static str> {
    if let Some((_, purpose)) = KNOWN_PURPOSES.iter().find(|(known, _)| *known == name) {
        return Some(purpose);
    }

    let lower = name.to_lowercase();
    if lower.contains("test") || lower.contains("spec") {
        Some("Testing")
    } else if lower.contains("lint") {
        Some("Linting")
    } else if lower.contains("format") {
        Some("Code formatting")
    } else if lower.contains("webpack") || lower.contains("bundle") {
        Some("Bundler")
    } else if lower.contains("babel") {
        Some("Transpiler")
    } else if lower.contains("mock") {
        Some("Mocking")
    } else if lower.starts_with("@types/") || lower.contains("types") {
        Some("Type definitions")
    } else {
        None
    }
}
