//! The DevCode Library catalog. Compile-time constant; the rest of the app
//! only ever borrows from it.

use super::{Category, CategoryIcon, Snippet, Subcategory};

pub static LIBRARY: &[Category] = &[
    Category {
        id: "html-semantics",
        title: "HTML Semantics & Modern Elements",
        description: "Complete HTML semantic elements with their modern 2025 equivalents",
        icon: CategoryIcon::Globe,
        subcategories: &[
            Subcategory {
                id: "document-structure",
                title: "Document Structure & Metadata",
                description: "Core document elements and meta information",
                tags: &["HTML5", "SEO", "Accessibility"],
                snippets: &[
                    Snippet {
                        id: "html-boilerplate",
                        title: "Modern HTML5 Boilerplate",
                        description: "Complete HTML5 document structure with modern meta tags",
                        code: r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="Your page description">
  <meta name="author" content="Your Name">
  <meta name="robots" content="index, follow">

  <!-- Open Graph / Facebook -->
  <meta property="og:type" content="website">
  <meta property="og:title" content="Your Title">
  <meta property="og:description" content="Your Description">
  <meta property="og:image" content="https://example.com/image.jpg">

  <!-- Twitter -->
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="Your Title">
  <meta name="twitter:description" content="Your Description">

  <title>Your Page Title</title>
  <link rel="stylesheet" href="styles.css">
  <link rel="icon" href="/favicon.ico">
</head>
<body>
  <div id="root"></div>
  <script type="module" src="main.js"></script>
</body>
</html>"##,
                        language: "html",
                        filename: Some("index.html"),
                        tags: &["boilerplate", "meta", "seo"],
                    },
                    Snippet {
                        id: "module-imports",
                        title: "Modern ES Module Imports",
                        description: "Import maps and module preloading for 2025",
                        code: r##"<script type="importmap">
{
  "imports": {
    "react": "https://esm.sh/react@18",
    "react-dom": "https://esm.sh/react-dom@18",
    "lodash": "https://esm.sh/lodash@4"
  }
}
</script>

<link rel="modulepreload" href="/src/main.js">
<link rel="modulepreload" href="/src/utils/helpers.js">

<script type="module">
  import React from 'react';
  import { createRoot } from 'react-dom';
  import App from './App.js';

  const root = createRoot(document.getElementById('root'));
  root.render(React.createElement(App));
</script>"##,
                        language: "html",
                        filename: Some("module-setup.html"),
                        tags: &["modules", "imports", "performance"],
                    },
                ],
            },
            Subcategory {
                id: "semantic-structure",
                title: "Semantic Structure Elements",
                description: "Modern semantic HTML for better accessibility and SEO",
                tags: &["Semantics", "Accessibility", "Structure"],
                snippets: &[
                    Snippet {
                        id: "semantic-layout",
                        title: "Complete Semantic Page Layout",
                        description: "Full page structure using semantic HTML5 elements",
                        code: r##"<body>
  <header role="banner">
    <nav role="navigation" aria-label="Main navigation">
      <ul>
        <li><a href="/" aria-current="page">Home</a></li>
        <li><a href="/about">About</a></li>
        <li><a href="/services">Services</a></li>
        <li><a href="/contact">Contact</a></li>
      </ul>
    </nav>
  </header>

  <main role="main">
    <section aria-labelledby="hero-title">
      <h1 id="hero-title">Welcome to Our Website</h1>
      <p>Your journey starts here.</p>
    </section>

    <aside role="complementary" aria-label="Related content">
      <h2>Related Articles</h2>
      <article>
        <h3>Article Title</h3>
        <time datetime="2025-01-01">January 1, 2025</time>
        <p>Article summary...</p>
      </article>
    </aside>
  </main>

  <footer role="contentinfo">
    <p>&copy; 2025 Your Company. All rights reserved.</p>
  </footer>
</body>"##,
                        language: "html",
                        filename: Some("semantic-layout.html"),
                        tags: &["semantic", "accessibility", "structure"],
                    },
                    Snippet {
                        id: "search-element",
                        title: "Modern Search Container",
                        description: "New semantic search element for site search functionality",
                        code: r##"<search role="search" aria-label="Site search">
  <form action="/search" method="get">
    <label for="search-input" class="sr-only">Search our site</label>
    <input
      type="search"
      id="search-input"
      name="q"
      placeholder="Search..."
      aria-describedby="search-help"
      autocomplete="off"
      spellcheck="false"
    >
    <button type="submit" aria-label="Submit search">
      <svg aria-hidden="true" viewBox="0 0 24 24">
        <path d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
      </svg>
    </button>
    <div id="search-help" class="sr-only">
      Search across all pages and content
    </div>
  </form>
</search>"##,
                        language: "html",
                        filename: Some("search-element.html"),
                        tags: &["search", "semantic", "form"],
                    },
                ],
            },
            Subcategory {
                id: "interactive-elements",
                title: "Interactive & Media Elements",
                description: "Modern interactive components and media handling",
                tags: &["Interactive", "Media", "UX"],
                snippets: &[
                    Snippet {
                        id: "details-summary",
                        title: "Accessible Accordion with Details/Summary",
                        description: "Native HTML accordion without JavaScript",
                        code: r##"<details class="accordion-item">
  <summary class="accordion-trigger">
    <span>Frequently Asked Question</span>
    <svg class="accordion-icon" aria-hidden="true">
      <path d="M6 9l6 6 6-6"/>
    </svg>
  </summary>
  <div class="accordion-content">
    <p>This is the answer to the question. The details element provides
    native disclosure functionality without requiring JavaScript.</p>
    <ul>
      <li>Fully accessible by default</li>
      <li>Keyboard navigation included</li>
      <li>Screen reader compatible</li>
    </ul>
  </div>
</details>

<style>
.accordion-item {
  border: 1px solid #e2e8f0;
  border-radius: 8px;
  margin-bottom: 1rem;
}

.accordion-trigger {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  cursor: pointer;
  background: #f8fafc;
}

details[open] .accordion-icon {
  transform: rotate(180deg);
}
</style>"##,
                        language: "html",
                        filename: Some("native-accordion.html"),
                        tags: &["accordion", "details", "accessibility"],
                    },
                    Snippet {
                        id: "dialog-modal",
                        title: "Native Modal Dialog",
                        description: "Modern HTML dialog element for modals",
                        code: r##"<button id="open-modal">Open Modal</button>

<dialog id="modal" aria-labelledby="modal-title">
  <form method="dialog">
    <h2 id="modal-title">Confirm Action</h2>
    <p>Are you sure you want to continue?</p>
    <div class="modal-actions">
      <button value="cancel">Cancel</button>
      <button value="confirm" autofocus>Confirm</button>
    </div>
  </form>
</dialog>

<script>
  const modal = document.getElementById('modal');
  const opener = document.getElementById('open-modal');

  opener.addEventListener('click', () => modal.showModal());

  modal.addEventListener('close', () => {
    console.log('Dialog closed with:', modal.returnValue);
  });

  // Close on backdrop click
  modal.addEventListener('click', (e) => {
    if (e.target === modal) modal.close('dismiss');
  });
</script>

<style>
  dialog::backdrop {
    background: rgb(0 0 0 / 0.5);
    backdrop-filter: blur(2px);
  }
</style>"##,
                        language: "html",
                        filename: Some("native-modal.html"),
                        tags: &["dialog", "modal", "native"],
                    },
                    Snippet {
                        id: "popover-element",
                        title: "Popover API Implementation",
                        description: "Modern popover attribute for lightweight pop-ups",
                        code: r##"<button popovertarget="info-popover">Show Info</button>

<div id="info-popover" popover>
  <h3>Quick Info</h3>
  <p>Popovers are light-dismissed by default: click outside
  or press Escape to close them.</p>
  <button popovertarget="info-popover" popovertargetaction="hide">
    Close
  </button>
</div>

<!-- Manual popover: stays open until explicitly closed -->
<button popovertarget="menu-popover" popovertargetaction="toggle">
  Menu
</button>
<div id="menu-popover" popover="manual">
  <nav>
    <a href="/profile">Profile</a>
    <a href="/settings">Settings</a>
    <a href="/logout">Log out</a>
  </nav>
</div>

<style>
  [popover] {
    border: 1px solid #cbd5e1;
    border-radius: 8px;
    padding: 1rem;
    box-shadow: 0 10px 15px rgb(0 0 0 / 0.1);
  }
  [popover]:popover-open {
    animation: fade-in 0.15s ease-out;
  }
</style>"##,
                        language: "html",
                        filename: Some("popover-api.html"),
                        tags: &["popover", "api", "lightweight"],
                    },
                ],
            },
        ],
    },
    Category {
        id: "react-components",
        title: "React Components & Hooks",
        description: "Modern React patterns, hooks, and component examples",
        icon: CategoryIcon::Code,
        subcategories: &[
            Subcategory {
                id: "modern-hooks",
                title: "Modern React Hooks",
                description: "Latest React hooks and patterns for 2025",
                tags: &["React", "Hooks", "State Management"],
                snippets: &[
                    Snippet {
                        id: "use-state-hook",
                        title: "useState with Complex State",
                        description: "Managing complex state with useState hook",
                        code: r##"import { useState, useCallback } from 'react';

interface User {
  id: string;
  name: string;
  email: string;
  preferences: {
    theme: 'light' | 'dark';
    notifications: boolean;
  };
}

const UserProfile = () => {
  const [user, setUser] = useState<User>({
    id: '1',
    name: 'John Doe',
    email: 'john@example.com',
    preferences: {
      theme: 'light',
      notifications: true
    }
  });

  const updateUser = useCallback((updates: Partial<User>) => {
    setUser(prev => ({
      ...prev,
      ...updates
    }));
  }, []);

  const updatePreferences = useCallback((newPrefs: Partial<User['preferences']>) => {
    setUser(prev => ({
      ...prev,
      preferences: {
        ...prev.preferences,
        ...newPrefs
      }
    }));
  }, []);

  return (
    <div className="user-profile">
      <h2>{user.name}</h2>
      <label>
        <input
          type="checkbox"
          checked={user.preferences.notifications}
          onChange={(e) => updatePreferences({ notifications: e.target.checked })}
        />
        Enable Notifications
      </label>
    </div>
  );
};

export default UserProfile;"##,
                        language: "typescript",
                        filename: Some("UserProfile.tsx"),
                        tags: &["useState", "useCallback", "typescript"],
                    },
                    Snippet {
                        id: "custom-hooks",
                        title: "Custom Hooks Collection",
                        description: "Reusable custom hooks for common functionality",
                        code: r##"import { useState, useEffect, useCallback, useRef } from 'react';

// Persist state to localStorage
export function useLocalStorage<T>(key: string, initialValue: T) {
  const [value, setValue] = useState<T>(() => {
    try {
      const item = window.localStorage.getItem(key);
      return item ? JSON.parse(item) : initialValue;
    } catch {
      return initialValue;
    }
  });

  useEffect(() => {
    window.localStorage.setItem(key, JSON.stringify(value));
  }, [key, value]);

  return [value, setValue] as const;
}

// Debounce a changing value
export function useDebounce<T>(value: T, delay = 300) {
  const [debounced, setDebounced] = useState(value);

  useEffect(() => {
    const timer = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(timer);
  }, [value, delay]);

  return debounced;
}

// Fetch JSON with abort on unmount
export function useFetch<T>(url: string) {
  const [data, setData] = useState<T | null>(null);
  const [error, setError] = useState<Error | null>(null);
  const [loading, setLoading] = useState(true);

  useEffect(() => {
    const controller = new AbortController();
    setLoading(true);
    fetch(url, { signal: controller.signal })
      .then(res => res.json())
      .then(setData)
      .catch(err => {
        if (err.name !== 'AbortError') setError(err);
      })
      .finally(() => setLoading(false));
    return () => controller.abort();
  }, [url]);

  return { data, error, loading };
}"##,
                        language: "typescript",
                        filename: Some("CustomHooks.tsx"),
                        tags: &["custom-hooks", "localStorage", "debounce", "fetch"],
                    },
                    Snippet {
                        id: "context-provider",
                        title: "Context API with useReducer",
                        description: "Global state management with Context and useReducer",
                        code: r##"import { createContext, useContext, useReducer, ReactNode } from 'react';

interface AppState {
  user: { name: string } | null;
  theme: 'light' | 'dark';
  notifications: string[];
}

type AppAction =
  | { type: 'SET_USER'; payload: AppState['user'] }
  | { type: 'TOGGLE_THEME' }
  | { type: 'ADD_NOTIFICATION'; payload: string }
  | { type: 'CLEAR_NOTIFICATIONS' };

const initialState: AppState = {
  user: null,
  theme: 'light',
  notifications: []
};

function appReducer(state: AppState, action: AppAction): AppState {
  switch (action.type) {
    case 'SET_USER':
      return { ...state, user: action.payload };
    case 'TOGGLE_THEME':
      return { ...state, theme: state.theme === 'light' ? 'dark' : 'light' };
    case 'ADD_NOTIFICATION':
      return { ...state, notifications: [...state.notifications, action.payload] };
    case 'CLEAR_NOTIFICATIONS':
      return { ...state, notifications: [] };
    default:
      return state;
  }
}

const AppContext = createContext<{
  state: AppState;
  dispatch: React.Dispatch<AppAction>;
} | null>(null);

export function AppProvider({ children }: { children: ReactNode }) {
  const [state, dispatch] = useReducer(appReducer, initialState);
  return (
    <AppContext.Provider value={{ state, dispatch }}>
      {children}
    </AppContext.Provider>
  );
}

export function useApp() {
  const ctx = useContext(AppContext);
  if (!ctx) throw new Error('useApp must be used within AppProvider');
  return ctx;
}"##,
                        language: "typescript",
                        filename: Some("AppContext.tsx"),
                        tags: &["context", "useReducer", "state-management"],
                    },
                ],
            },
            Subcategory {
                id: "component-patterns",
                title: "Component Patterns & Architecture",
                description: "Advanced React patterns and component architecture",
                tags: &["Patterns", "Architecture", "Performance"],
                snippets: &[
                    Snippet {
                        id: "compound-components",
                        title: "Compound Components Pattern",
                        description: "Flexible component composition with compound pattern",
                        code: r##"import { createContext, useContext, useState, ReactNode } from 'react';

const TabsContext = createContext<{
  active: string;
  setActive: (id: string) => void;
} | null>(null);

function Tabs({ defaultTab, children }: { defaultTab: string; children: ReactNode }) {
  const [active, setActive] = useState(defaultTab);
  return (
    <TabsContext.Provider value={{ active, setActive }}>
      <div className="tabs">{children}</div>
    </TabsContext.Provider>
  );
}

function TabList({ children }: { children: ReactNode }) {
  return <div role="tablist" className="tab-list">{children}</div>;
}

function Tab({ id, children }: { id: string; children: ReactNode }) {
  const ctx = useContext(TabsContext)!;
  return (
    <button
      role="tab"
      aria-selected={ctx.active === id}
      onClick={() => ctx.setActive(id)}
    >
      {children}
    </button>
  );
}

function TabPanel({ id, children }: { id: string; children: ReactNode }) {
  const ctx = useContext(TabsContext)!;
  if (ctx.active !== id) return null;
  return <div role="tabpanel">{children}</div>;
}

Tabs.List = TabList;
Tabs.Tab = Tab;
Tabs.Panel = TabPanel;

// Usage:
// <Tabs defaultTab="code">
//   <Tabs.List>
//     <Tabs.Tab id="code">Code</Tabs.Tab>
//     <Tabs.Tab id="preview">Preview</Tabs.Tab>
//   </Tabs.List>
//   <Tabs.Panel id="code">...</Tabs.Panel>
// </Tabs>

export default Tabs;"##,
                        language: "typescript",
                        filename: Some("CompoundComponents.tsx"),
                        tags: &["compound-pattern", "context", "composition"],
                    },
                    Snippet {
                        id: "render-props",
                        title: "Render Props Pattern",
                        description: "Flexible data sharing with render props pattern",
                        code: r##"import { useState, useEffect, ReactNode } from 'react';

interface MousePosition {
  x: number;
  y: number;
}

function MouseTracker({
  render
}: {
  render: (pos: MousePosition) => ReactNode;
}) {
  const [pos, setPos] = useState<MousePosition>({ x: 0, y: 0 });

  useEffect(() => {
    const onMove = (e: MouseEvent) => setPos({ x: e.clientX, y: e.clientY });
    window.addEventListener('mousemove', onMove);
    return () => window.removeEventListener('mousemove', onMove);
  }, []);

  return <>{render(pos)}</>;
}

function DataFetcher<T>({
  url,
  children
}: {
  url: string;
  children: (state: { data: T | null; loading: boolean }) => ReactNode;
}) {
  const [data, setData] = useState<T | null>(null);
  const [loading, setLoading] = useState(true);

  useEffect(() => {
    fetch(url)
      .then(res => res.json())
      .then(setData)
      .finally(() => setLoading(false));
  }, [url]);

  return <>{children({ data, loading })}</>;
}

// Usage:
// <MouseTracker render={({ x, y }) => <p>{x}, {y}</p>} />
// <DataFetcher url="/api/users">
//   {({ data, loading }) => loading ? <Spinner /> : <UserList users={data} />}
// </DataFetcher>

export { MouseTracker, DataFetcher };"##,
                        language: "typescript",
                        filename: Some("RenderProps.tsx"),
                        tags: &["render-props", "data-fetching", "mouse-tracking"],
                    },
                ],
            },
        ],
    },
    Category {
        id: "vue-components",
        title: "Vue.js Components & Composition",
        description: "Modern Vue 3 composition API and component patterns",
        icon: CategoryIcon::Layers,
        subcategories: &[
            Subcategory {
                id: "composition-api",
                title: "Composition API Patterns",
                description: "Vue 3 composition API with TypeScript",
                tags: &["Vue 3", "Composition API", "TypeScript"],
                snippets: &[
                    Snippet {
                        id: "basic-composition",
                        title: "Basic Composition API Setup",
                        description: "Fundamental Vue 3 composition API with TypeScript",
                        code: r##"<template>
  <div class="user-profile">
    <h2>{{ user.name }}</h2>
    <p v-if="emailError" class="error">{{ emailError }}</p>
    <input v-model="user.email" @blur="validateEmail" />
    <button :disabled="!isValid" @click="save">Save</button>
  </div>
</template>

<script setup lang="ts">
import { reactive, ref, computed } from 'vue';

interface User {
  name: string;
  email: string;
}

const user = reactive<User>({
  name: 'Jane Doe',
  email: 'jane@example.com'
});

const emailError = ref<string | null>(null);

const isValid = computed(() => emailError.value === null);

function validateEmail() {
  emailError.value = /^[^@]+@[^@]+$/.test(user.email)
    ? null
    : 'Please enter a valid email address';
}

async function save() {
  validateEmail();
  if (!isValid.value) return;
  await fetch('/api/user', {
    method: 'PUT',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(user)
  });
}
</script>"##,
                        language: "vue",
                        filename: Some("UserProfile.vue"),
                        tags: &["composition-api", "typescript", "validation"],
                    },
                    Snippet {
                        id: "vue-composables",
                        title: "Custom Composables Collection",
                        description: "Reusable Vue 3 composables for common functionality",
                        code: r##"import { ref, watch, onMounted, onUnmounted, Ref } from 'vue';

// Sync a ref with localStorage
export function useLocalStorage<T>(key: string, initial: T): Ref<T> {
  const stored = localStorage.getItem(key);
  const value = ref(stored ? JSON.parse(stored) : initial) as Ref<T>;

  watch(value, (v) => localStorage.setItem(key, JSON.stringify(v)), {
    deep: true
  });

  return value;
}

// Track window size reactively
export function useWindowSize() {
  const width = ref(window.innerWidth);
  const height = ref(window.innerHeight);

  const onResize = () => {
    width.value = window.innerWidth;
    height.value = window.innerHeight;
  };

  onMounted(() => window.addEventListener('resize', onResize));
  onUnmounted(() => window.removeEventListener('resize', onResize));

  return { width, height };
}

// Debounced ref
export function useDebouncedRef<T>(source: Ref<T>, delay = 300): Ref<T> {
  const debounced = ref(source.value) as Ref<T>;
  let timer: ReturnType<typeof setTimeout> | null = null;

  watch(source, (v) => {
    if (timer) clearTimeout(timer);
    timer = setTimeout(() => (debounced.value = v), delay);
  });

  return debounced;
}"##,
                        language: "vue",
                        filename: Some("ComposablesExample.vue"),
                        tags: &["composables", "hooks", "reusable"],
                    },
                ],
            },
            Subcategory {
                id: "vue-state-management",
                title: "Pinia State Management",
                description: "Modern Vue state management with Pinia",
                tags: &["Pinia", "State Management", "TypeScript"],
                snippets: &[Snippet {
                    id: "pinia-store",
                    title: "Complete Pinia Store Setup",
                    description: "Full-featured Pinia store with TypeScript",
                    code: r##"import { defineStore } from 'pinia';
import { ref, computed } from 'vue';

interface Todo {
  id: number;
  text: string;
  done: boolean;
}

export const useTodoStore = defineStore('todos', () => {
  // State
  const todos = ref<Todo[]>([]);
  const filter = ref<'all' | 'open' | 'done'>('all');
  const loading = ref(false);

  // Getters
  const filtered = computed(() => {
    switch (filter.value) {
      case 'open': return todos.value.filter(t => !t.done);
      case 'done': return todos.value.filter(t => t.done);
      default: return todos.value;
    }
  });

  const openCount = computed(() => todos.value.filter(t => !t.done).length);

  // Actions
  async function load() {
    loading.value = true;
    try {
      const res = await fetch('/api/todos');
      todos.value = await res.json();
    } finally {
      loading.value = false;
    }
  }

  function add(text: string) {
    todos.value.push({ id: Date.now(), text, done: false });
  }

  function toggle(id: number) {
    const todo = todos.value.find(t => t.id === id);
    if (todo) todo.done = !todo.done;
  }

  return { todos, filter, loading, filtered, openCount, load, add, toggle };
});"##,
                    language: "typescript",
                    filename: Some("stores.ts"),
                    tags: &["pinia", "state", "typescript"],
                }],
            },
        ],
    },
    Category {
        id: "backend-apis",
        title: "Backend & API Development",
        description: "Server-side code, APIs, and backend configurations",
        icon: CategoryIcon::Server,
        subcategories: &[
            Subcategory {
                id: "node-express",
                title: "Node.js & Express APIs",
                description: "Modern Express.js APIs with TypeScript",
                tags: &["Node.js", "Express", "REST API"],
                snippets: &[
                    Snippet {
                        id: "express-setup",
                        title: "Complete Express Server Setup",
                        description: "Production-ready Express server with middleware",
                        code: r##"import express from 'express';
import helmet from 'helmet';
import cors from 'cors';
import compression from 'compression';
import rateLimit from 'express-rate-limit';

const app = express();

app.use(helmet());
app.use(cors({ origin: process.env.CORS_ORIGIN, credentials: true }));
app.use(compression());
app.use(express.json({ limit: '10mb' }));
app.use(express.urlencoded({ extended: true }));

app.use(rateLimit({
  windowMs: 15 * 60 * 1000,
  max: 100,
  standardHeaders: true
}));

app.get('/health', (_req, res) => {
  res.json({ status: 'ok', uptime: process.uptime() });
});

app.use((err: Error, _req: express.Request, res: express.Response, _next: express.NextFunction) => {
  console.error(err.stack);
  res.status(500).json({ error: 'Internal server error' });
});

const port = Number(process.env.PORT) || 3000;
app.listen(port, () => {
  console.log(`Server listening on port ${port}`);
});"##,
                        language: "typescript",
                        filename: Some("server.ts"),
                        tags: &["express", "server", "middleware"],
                    },
                    Snippet {
                        id: "express-middleware",
                        title: "Custom Express Middleware",
                        description: "Authentication, validation, and error handling middleware",
                        code: r##"import { Request, Response, NextFunction } from 'express';
import jwt from 'jsonwebtoken';
import { z, ZodSchema } from 'zod';

export interface AuthedRequest extends Request {
  userId?: string;
}

export function requireAuth(req: AuthedRequest, res: Response, next: NextFunction) {
  const header = req.headers.authorization;
  if (!header?.startsWith('Bearer ')) {
    return res.status(401).json({ error: 'Missing token' });
  }
  try {
    const payload = jwt.verify(header.slice(7), process.env.JWT_SECRET!);
    req.userId = (payload as { sub: string }).sub;
    next();
  } catch {
    res.status(401).json({ error: 'Invalid token' });
  }
}

export function validateBody(schema: ZodSchema) {
  return (req: Request, res: Response, next: NextFunction) => {
    const result = schema.safeParse(req.body);
    if (!result.success) {
      return res.status(400).json({ errors: result.error.flatten() });
    }
    req.body = result.data;
    next();
  };
}

export function asyncHandler(
  fn: (req: Request, res: Response, next: NextFunction) => Promise<unknown>
) {
  return (req: Request, res: Response, next: NextFunction) =>
    fn(req, res, next).catch(next);
}"##,
                        language: "typescript",
                        filename: Some("middleware.ts"),
                        tags: &["middleware", "auth", "validation"],
                    },
                    Snippet {
                        id: "express-routes",
                        title: "Complete Express Routes",
                        description: "Full CRUD routes with authentication and validation",
                        code: r##"import { Router } from 'express';
import { z } from 'zod';
import { requireAuth, validateBody, asyncHandler } from './middleware';
import * as posts from './services/posts';

const router = Router();

const createPostSchema = z.object({
  title: z.string().min(1).max(200),
  body: z.string().min(1),
  tags: z.array(z.string()).default([])
});

router.get('/posts', asyncHandler(async (req, res) => {
  const page = Number(req.query.page) || 1;
  res.json(await posts.list({ page, perPage: 20 }));
}));

router.get('/posts/:id', asyncHandler(async (req, res) => {
  const post = await posts.find(req.params.id);
  if (!post) return res.status(404).json({ error: 'Not found' });
  res.json(post);
}));

router.post(
  '/posts',
  requireAuth,
  validateBody(createPostSchema),
  asyncHandler(async (req, res) => {
    const post = await posts.create(req.body);
    res.status(201).json(post);
  })
);

router.delete('/posts/:id', requireAuth, asyncHandler(async (req, res) => {
  await posts.remove(req.params.id);
  res.status(204).end();
}));

export default router;"##,
                        language: "typescript",
                        filename: Some("routes.ts"),
                        tags: &["routes", "crud", "auth"],
                    },
                ],
            },
            Subcategory {
                id: "database-integration",
                title: "Database Integration",
                description: "Database setup and ORM configurations",
                tags: &["Database", "MongoDB", "PostgreSQL"],
                snippets: &[Snippet {
                    id: "mongodb-mongoose",
                    title: "MongoDB with Mongoose Setup",
                    description: "Complete MongoDB integration with Mongoose ODM",
                    code: r##"import mongoose, { Schema, model } from 'mongoose';

export async function connectDatabase() {
  const uri = process.env.MONGODB_URI ?? 'mongodb://localhost:27017/app';
  await mongoose.connect(uri, { maxPoolSize: 10 });

  mongoose.connection.on('error', (err) => {
    console.error('MongoDB connection error:', err);
  });
}

const userSchema = new Schema(
  {
    email: { type: String, required: true, unique: true, lowercase: true },
    name: { type: String, required: true, trim: true },
    role: { type: String, enum: ['user', 'admin'], default: 'user' },
    posts: [{ type: Schema.Types.ObjectId, ref: 'Post' }]
  },
  { timestamps: true }
);

userSchema.index({ email: 1 });

const postSchema = new Schema(
  {
    title: { type: String, required: true },
    body: { type: String, required: true },
    author: { type: Schema.Types.ObjectId, ref: 'User', required: true },
    tags: [String]
  },
  { timestamps: true }
);

postSchema.index({ tags: 1, createdAt: -1 });

export const User = model('User', userSchema);
export const Post = model('Post', postSchema);"##,
                    language: "typescript",
                    filename: Some("database-mongodb.ts"),
                    tags: &["mongodb", "mongoose", "schemas"],
                }],
            },
        ],
    },
    Category {
        id: "page-templates",
        title: "Complete Page Templates",
        description: "Full page templates for common website types",
        icon: CategoryIcon::Layout,
        subcategories: &[
            Subcategory {
                id: "landing-pages",
                title: "Landing Pages",
                description: "Modern landing page templates",
                tags: &["Landing", "Marketing", "Hero"],
                snippets: &[Snippet {
                    id: "saas-landing",
                    title: "SaaS Landing Page",
                    description: "Complete SaaS product landing page with all sections",
                    code: r##"const SaaSLandingPage = () => {
  const features = [
    { title: 'Lightning Fast', text: 'Sub-second load times worldwide.' },
    { title: 'Secure by Default', text: 'SOC 2 compliant infrastructure.' },
    { title: 'Real-time Analytics', text: 'Live dashboards out of the box.' }
  ];

  return (
    <div className="min-h-screen">
      <header className="flex items-center justify-between px-8 py-4">
        <span className="text-xl font-bold">Acme</span>
        <nav className="flex gap-6">
          <a href="#features">Features</a>
          <a href="#pricing">Pricing</a>
          <a href="/login" className="font-semibold">Sign in</a>
        </nav>
      </header>

      <section className="text-center py-24 px-4">
        <h1 className="text-5xl font-bold mb-6">
          Ship your product faster
        </h1>
        <p className="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
          Everything you need to build, launch, and scale — without
          the infrastructure headaches.
        </p>
        <a href="/signup" className="bg-blue-600 text-white px-8 py-3 rounded-lg">
          Start free trial
        </a>
      </section>

      <section id="features" className="grid md:grid-cols-3 gap-8 px-8 py-16">
        {features.map((f) => (
          <div key={f.title} className="p-6 border rounded-xl">
            <h3 className="font-semibold mb-2">{f.title}</h3>
            <p className="text-gray-600">{f.text}</p>
          </div>
        ))}
      </section>

      <footer className="text-center py-8 text-gray-500">
        &copy; 2025 Acme Inc.
      </footer>
    </div>
  );
};

export default SaaSLandingPage;"##,
                    language: "typescript",
                    filename: Some("SaaSLandingPage.tsx"),
                    tags: &["saas", "landing", "hero"],
                }],
            },
            Subcategory {
                id: "dashboard-templates",
                title: "Dashboard Templates",
                description: "Admin dashboards and data visualization layouts",
                tags: &["Dashboard", "Admin", "Analytics"],
                snippets: &[Snippet {
                    id: "admin-dashboard",
                    title: "Complete Admin Dashboard",
                    description: "Full-featured admin dashboard with sidebar and charts",
                    code: r##"import { useState } from 'react';

const AdminDashboard = () => {
  const [sidebarOpen, setSidebarOpen] = useState(true);

  const stats = [
    { label: 'Total Users', value: '12,361', change: '+12%' },
    { label: 'Revenue', value: '$48,210', change: '+8%' },
    { label: 'Active Sessions', value: '1,893', change: '-2%' },
    { label: 'Conversion', value: '3.4%', change: '+0.6%' }
  ];

  return (
    <div className="flex h-screen bg-gray-50">
      <aside className={sidebarOpen ? 'w-64' : 'w-16'}>
        <nav className="p-4 space-y-2">
          <a href="/admin" className="block p-2 rounded bg-blue-50">Overview</a>
          <a href="/admin/users" className="block p-2 rounded">Users</a>
          <a href="/admin/reports" className="block p-2 rounded">Reports</a>
          <a href="/admin/settings" className="block p-2 rounded">Settings</a>
        </nav>
      </aside>

      <main className="flex-1 overflow-auto p-8">
        <button onClick={() => setSidebarOpen(o => !o)}>☰</button>

        <div className="grid grid-cols-4 gap-4 my-8">
          {stats.map((s) => (
            <div key={s.label} className="bg-white p-6 rounded-xl shadow-sm">
              <p className="text-sm text-gray-500">{s.label}</p>
              <p className="text-2xl font-bold">{s.value}</p>
              <p className="text-sm">{s.change} vs last month</p>
            </div>
          ))}
        </div>

        <section className="bg-white rounded-xl shadow-sm p-6">
          <h2 className="font-semibold mb-4">Traffic (last 30 days)</h2>
          {/* chart mounts here */}
          <div id="traffic-chart" className="h-64" />
        </section>
      </main>
    </div>
  );
};

export default AdminDashboard;"##,
                    language: "typescript",
                    filename: Some("AdminDashboard.tsx"),
                    tags: &["dashboard", "admin", "sidebar"],
                }],
            },
        ],
    },
    Category {
        id: "responsive-design",
        title: "Responsive Design & Mobile",
        description: "Mobile-first responsive layouts and media queries",
        icon: CategoryIcon::Smartphone,
        subcategories: &[
            Subcategory {
                id: "media-queries",
                title: "Media Queries & Breakpoints",
                description: "Modern CSS media queries and responsive breakpoints",
                tags: &["CSS", "Responsive", "Mobile"],
                snippets: &[Snippet {
                    id: "modern-media-queries",
                    title: "Modern Media Queries Collection",
                    description: "Comprehensive media queries for all devices and preferences",
                    code: r##"/* Mobile-first breakpoints */
:root {
  --content-width: 100%;
}

@media (min-width: 640px) {
  :root { --content-width: 600px; }
}

@media (min-width: 1024px) {
  :root { --content-width: 960px; }
}

/* Range syntax (2023+) */
@media (400px <= width <= 700px) {
  .sidebar { display: none; }
}

/* User preferences */
@media (prefers-color-scheme: dark) {
  body { background: #0f172a; color: #e2e8f0; }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}

/* Input capabilities */
@media (hover: hover) and (pointer: fine) {
  .card:hover { transform: translateY(-2px); }
}

/* Container queries */
.card-grid { container-type: inline-size; }

@container (min-width: 500px) {
  .card { grid-template-columns: 1fr 2fr; }
}"##,
                    language: "css",
                    filename: Some("responsive-media-queries.css"),
                    tags: &["media-queries", "responsive", "mobile-first"],
                }],
            },
            Subcategory {
                id: "css-grid-layouts",
                title: "CSS Grid Responsive Layouts",
                description: "Modern CSS Grid layouts for responsive design",
                tags: &["CSS Grid", "Layout", "Responsive"],
                snippets: &[Snippet {
                    id: "css-grid-layouts",
                    title: "Complete CSS Grid Layout System",
                    description: "Comprehensive CSS Grid layouts for modern responsive design",
                    code: r##"/* Auto-fitting card grid: no media queries needed */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(min(280px, 100%), 1fr));
  gap: 1.5rem;
}

/* Holy grail page layout */
.page {
  display: grid;
  min-height: 100vh;
  grid-template-rows: auto 1fr auto;
  grid-template-columns: 240px 1fr;
  grid-template-areas:
    "header header"
    "sidebar main"
    "footer footer";
}

.page > header { grid-area: header; }
.page > aside  { grid-area: sidebar; }
.page > main   { grid-area: main; }
.page > footer { grid-area: footer; }

@media (max-width: 768px) {
  .page {
    grid-template-columns: 1fr;
    grid-template-areas:
      "header"
      "main"
      "footer";
  }
  .page > aside { display: none; }
}

/* Masonry-ish gallery with dense packing */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  grid-auto-rows: 120px;
  grid-auto-flow: dense;
  gap: 0.5rem;
}

.gallery .wide { grid-column: span 2; }
.gallery .tall { grid-row: span 2; }"##,
                    language: "css",
                    filename: Some("css-grid-layouts.css"),
                    tags: &["css-grid", "layout", "responsive"],
                }],
            },
        ],
    },
    Category {
        id: "styling-frameworks",
        title: "Styling & CSS Frameworks",
        description: "Modern CSS frameworks and styling approaches",
        icon: CategoryIcon::Palette,
        subcategories: &[Subcategory {
            id: "tailwind-examples",
            title: "Tailwind CSS Examples",
            description: "Comprehensive Tailwind CSS component examples",
            tags: &["Tailwind", "Utility-First", "CSS"],
            snippets: &[Snippet {
                id: "tailwind-components",
                title: "Complete Tailwind Component Library",
                description: "Ready-to-use Tailwind CSS components for modern web apps",
                code: r##"<!-- Button variants -->
<button class="bg-blue-600 hover:bg-blue-700 text-white font-medium px-4 py-2 rounded-lg transition-colors">
  Primary
</button>
<button class="border border-gray-300 hover:bg-gray-50 text-gray-700 font-medium px-4 py-2 rounded-lg">
  Secondary
</button>

<!-- Card -->
<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
  <img src="/cover.jpg" alt="" class="w-full h-48 object-cover">
  <div class="p-6">
    <h3 class="text-lg font-semibold mb-2">Card title</h3>
    <p class="text-gray-600 text-sm mb-4">Supporting copy for the card.</p>
    <span class="inline-block px-2 py-1 bg-blue-100 text-blue-700 rounded-full text-xs">
      Tag
    </span>
  </div>
</div>

<!-- Form input with label and error state -->
<div class="space-y-1">
  <label for="email" class="block text-sm font-medium text-gray-700">Email</label>
  <input
    id="email"
    type="email"
    class="w-full px-3 py-2 border border-gray-300 rounded-lg
           focus:outline-none focus:ring-2 focus:ring-blue-500
           invalid:border-red-500"
    placeholder="you@example.com"
  >
  <p class="text-sm text-red-600 hidden peer-invalid:block">
    Please enter a valid email.
  </p>
</div>

<!-- Responsive navbar -->
<nav class="flex items-center justify-between px-4 py-3 bg-white shadow-sm">
  <span class="font-bold text-lg">Brand</span>
  <div class="hidden md:flex gap-6">
    <a href="#" class="text-gray-600 hover:text-gray-900">Docs</a>
    <a href="#" class="text-gray-600 hover:text-gray-900">Blog</a>
  </div>
  <button class="md:hidden p-2" aria-label="Open menu">☰</button>
</nav>"##,
                language: "html",
                filename: Some("tailwind-components.html"),
                tags: &["tailwind", "components", "responsive"],
            }],
        }],
    },
    Category {
        id: "deployment-auth",
        title: "Deployment & Authentication",
        description: "Deployment configurations and authentication systems",
        icon: CategoryIcon::Shield,
        subcategories: &[
            Subcategory {
                id: "deployment-configs",
                title: "Deployment Configurations",
                description: "Docker, Vercel, Netlify, and cloud deployment setups",
                tags: &["Deployment", "Docker", "CI/CD"],
                snippets: &[
                    Snippet {
                        id: "docker-deployment",
                        title: "Complete Docker Deployment Setup",
                        description: "Production-ready Docker configuration with multi-stage builds",
                        code: r##"# Dockerfile
FROM node:20-alpine AS builder
WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY . .
RUN npm run build

FROM node:20-alpine AS runner
WORKDIR /app
ENV NODE_ENV=production
RUN addgroup -S app && adduser -S app -G app
COPY --from=builder --chown=app:app /app/dist ./dist
COPY --from=builder --chown=app:app /app/node_modules ./node_modules
USER app
EXPOSE 3000
HEALTHCHECK --interval=30s --timeout=3s \
  CMD wget -qO- http://localhost:3000/health || exit 1
CMD ["node", "dist/server.js"]

# docker-compose.yml
services:
  web:
    build: .
    ports:
      - "3000:3000"
    environment:
      - DATABASE_URL=postgres://app:secret@db:5432/app
    depends_on:
      db:
        condition: service_healthy
  db:
    image: postgres:16-alpine
    environment:
      POSTGRES_USER: app
      POSTGRES_PASSWORD: secret
    volumes:
      - pgdata:/var/lib/postgresql/data
    healthcheck:
      test: ["CMD-SHELL", "pg_isready -U app"]
      interval: 5s
volumes:
  pgdata:"##,
                        language: "dockerfile",
                        filename: Some("docker-deployment.yml"),
                        tags: &["docker", "kubernetes", "cicd"],
                    },
                    Snippet {
                        id: "vercel-deployment",
                        title: "Vercel Deployment Configuration",
                        description: "Complete Vercel deployment setup with environment variables",
                        code: r##"{
  "$schema": "https://openapi.vercel.sh/vercel.json",
  "framework": "nextjs",
  "regions": ["iad1", "fra1"],
  "buildCommand": "npm run build",
  "headers": [
    {
      "source": "/api/(.*)",
      "headers": [
        { "key": "Cache-Control", "value": "no-store" },
        { "key": "X-Content-Type-Options", "value": "nosniff" }
      ]
    },
    {
      "source": "/assets/(.*)",
      "headers": [
        { "key": "Cache-Control", "value": "public, max-age=31536000, immutable" }
      ]
    }
  ],
  "redirects": [
    { "source": "/home", "destination": "/", "permanent": true }
  ],
  "rewrites": [
    { "source": "/docs/:path*", "destination": "https://docs.example.com/:path*" }
  ],
  "env": {
    "NEXT_PUBLIC_API_URL": "https://api.example.com"
  },
  "crons": [
    { "path": "/api/cron/cleanup", "schedule": "0 3 * * *" }
  ]
}"##,
                        language: "json",
                        filename: Some("vercel.json"),
                        tags: &["vercel", "serverless", "deployment"],
                    },
                ],
            },
            Subcategory {
                id: "auth-systems",
                title: "Authentication Systems",
                description: "Complete authentication implementations",
                tags: &["Auth", "JWT", "OAuth"],
                snippets: &[Snippet {
                    id: "nextauth-setup",
                    title: "Complete NextAuth.js Setup",
                    description: "Full NextAuth.js authentication with multiple providers",
                    code: r##"import NextAuth from 'next-auth';
import GitHub from 'next-auth/providers/github';
import Google from 'next-auth/providers/google';
import Credentials from 'next-auth/providers/credentials';
import { verifyPassword } from '@/lib/auth';
import { getUserByEmail } from '@/lib/db';

export const { handlers, auth, signIn, signOut } = NextAuth({
  providers: [
    GitHub({
      clientId: process.env.GITHUB_ID!,
      clientSecret: process.env.GITHUB_SECRET!
    }),
    Google({
      clientId: process.env.GOOGLE_CLIENT_ID!,
      clientSecret: process.env.GOOGLE_CLIENT_SECRET!
    }),
    Credentials({
      credentials: {
        email: { label: 'Email', type: 'email' },
        password: { label: 'Password', type: 'password' }
      },
      async authorize(credentials) {
        const user = await getUserByEmail(credentials.email as string);
        if (!user) return null;
        const valid = await verifyPassword(
          credentials.password as string,
          user.passwordHash
        );
        return valid ? { id: user.id, email: user.email, name: user.name } : null;
      }
    })
  ],
  session: { strategy: 'jwt', maxAge: 30 * 24 * 60 * 60 },
  callbacks: {
    async jwt({ token, user }) {
      if (user) token.id = user.id;
      return token;
    },
    async session({ session, token }) {
      if (token.id) session.user.id = token.id as string;
      return session;
    }
  },
  pages: { signIn: '/login' }
});"##,
                    language: "typescript",
                    filename: Some("nextauth-setup.ts"),
                    tags: &["nextauth", "authentication", "oauth"],
                }],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::LIBRARY;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let mut category_ids = HashSet::new();
        let mut subcategory_ids = HashSet::new();
        let mut snippet_ids = HashSet::new();
        for category in LIBRARY {
            assert!(category_ids.insert(category.id), "duplicate category id {}", category.id);
            for subcategory in category.subcategories {
                assert!(
                    subcategory_ids.insert(subcategory.id),
                    "duplicate subcategory id {}",
                    subcategory.id
                );
                for snippet in subcategory.snippets {
                    assert!(snippet_ids.insert(snippet.id), "duplicate snippet id {}", snippet.id);
                }
            }
        }
    }

    #[test]
    fn canonical_subcategories_have_snippets() {
        for category in LIBRARY {
            assert!(!category.subcategories.is_empty(), "{} has no subcategories", category.id);
            for subcategory in category.subcategories {
                assert!(!subcategory.snippets.is_empty(), "{} has no snippets", subcategory.id);
            }
        }
    }

    #[test]
    fn required_fields_are_populated() {
        for category in LIBRARY {
            assert!(!category.title.is_empty() && !category.description.is_empty());
            for subcategory in category.subcategories {
                assert!(!subcategory.title.is_empty() && !subcategory.tags.is_empty());
                for snippet in subcategory.snippets {
                    assert!(!snippet.title.is_empty(), "{} missing title", snippet.id);
                    assert!(!snippet.description.is_empty(), "{} missing description", snippet.id);
                    assert!(!snippet.code.is_empty(), "{} missing code", snippet.id);
                    assert!(!snippet.language.is_empty(), "{} missing language", snippet.id);
                    assert!(!snippet.tags.is_empty(), "{} missing tags", snippet.id);
                }
            }
        }
    }
}
